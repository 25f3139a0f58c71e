mod game_trait;

pub use game_trait::*;

use crate::data_structures::LinkedList;
use crate::linked_list;
use crate::stats::SearchCounter;

/// Principal variation: the line of play a game-tree search believes best,
/// maximizing agent's move first.
#[allow(type_alias_bounds)]
pub type PV<G: GameTree> = LinkedList<G::Action>;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "G::Action: serde::Serialize",
        deserialize = "G::Action: serde::Deserialize<'de>"
    ))
)]
pub struct SearchResult<G: GameTree> {
    /// Principal variation
    pub pv: PV<G>,
    pub value: Value,
    pub counter: SearchCounter,
}

impl<G: GameTree> Default for SearchResult<G> {
    fn default() -> Self {
        SearchResult::new(linked_list![], Value::MIN, Default::default())
    }
}

impl<G: GameTree> SearchResult<G> {
    #[inline]
    pub fn new(pv: PV<G>, value: Value, counter: SearchCounter) -> Self {
        SearchResult { pv, value, counter }
    }
}

/// A game-tree search strategy.
pub trait GameTreeSearch<G: GameTree> {
    fn search(&mut self, position: &G) -> SearchResult<G>;

    /// Best action for the maximizing agent at `position`, if it has any.
    fn choose_action(&mut self, position: &G) -> Option<G::Action> {
        self.search(position).pv.head().copied()
    }
}
