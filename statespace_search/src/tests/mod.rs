use std::sync::Arc;

use statespace::explicit_graph::{ActionId, ExplicitGraph, StateId};
use statespace::problem::SearchProblem;
use statespace::scripted::ScriptedTree;



pub mod prop_tests;

#[cfg(feature = "serde")]
pub mod serialization;

/// The four-node diamond:
/// `A -> B` (1), `A -> C` (5), `B -> D` (1), `C -> D` (1), goal `D`.
pub fn diamond() -> ExplicitGraph {
    let mut b = ExplicitGraph::builder();
    b.edge("A", "B", "ab", 1.0).unwrap();
    b.edge("A", "C", "ac", 5.0).unwrap();
    b.edge("B", "D", "bd", 1.0).unwrap();
    b.edge("C", "D", "cd", 1.0).unwrap();
    b.start("A").goal("D");
    b.build().unwrap()
}

/// Two agents, one ply: the maximizer's options lead to minimizer replies
/// scoring `[+5, +5]` and `[-10, +100]`.
pub fn ghost_pick_tree() -> Arc<ScriptedTree> {
    let mut b = ScriptedTree::builder(2);
    let l0 = b.leaf(5.0);
    let l1 = b.leaf(5.0);
    let l2 = b.leaf(-10.0);
    let l3 = b.leaf(100.0);
    let m0 = b.internal(0.0, &[l0, l1]);
    let m1 = b.internal(0.0, &[l2, l3]);
    let root = b.internal(0.0, &[m0, m1]);
    b.build(root)
}

/// Walks `actions` through the successor relation from the start state,
/// panicking if any action is not legal where it is taken.
pub fn replay(g: &ExplicitGraph, actions: &[ActionId]) -> StateId {
    let mut state = g.start_state();
    for &action in actions {
        let succ = g.successors(&state);
        let edge = succ
            .iter()
            .find(|s| s.action == action)
            .expect("plan action must be legal where it is taken");
        state = edge.state;
    }
    state
}
