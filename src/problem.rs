use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::stats::SearchCounter;

/// A cumulative or per-step path cost.
///
/// Costs must be non-negative; the optimality guarantees of uniform-cost and
/// A* search do not hold otherwise. The ordering is total (`f64::total_cmp`)
/// so costs can key priority queues.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(pub f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Cost {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Cost;

    #[inline]
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    #[inline]
    fn add_assign(&mut self, rhs: Cost) {
        self.0 += rhs.0;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl From<f64> for Cost {
    #[inline]
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

/// A single `(state, action, step cost)` edge out of a state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

pub type SuccessorList<S, A> = smallvec::SmallVec<[Successor<S, A>; 16]>;

/// The contract a state space must satisfy to be searched.
///
/// States are opaque to the algorithms: they are only cloned, compared,
/// hashed and handed back to `successors`/`is_goal_state`. Implementations
/// are trusted to be well-formed (finite successor lists, non-negative step
/// costs); the searchers do not validate them.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Copy + Eq + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> SuccessorList<Self::State, Self::Action>;

    /// Total cost of applying `actions` from the start state.
    ///
    /// Returns `None` if the sequence ever leaves the legal successor
    /// relation.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Estimates must be non-negative. A* is optimal when the estimate is
/// admissible and consistent.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

/// The trivial estimate. A* with this heuristic behaves exactly like
/// uniform-cost search, node for node.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHeuristic;

impl<P: SearchProblem> Heuristic<P> for NullHeuristic {
    #[inline]
    fn estimate(&self, _state: &P::State, _problem: &P) -> Cost {
        Cost::ZERO
    }
}

/// Adapts a closure into a [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct FnHeuristic<F>(pub F);

impl<P: SearchProblem, F: Fn(&P::State, &P) -> Cost> Heuristic<P> for FnHeuristic<F> {
    #[inline]
    fn estimate(&self, state: &P::State, problem: &P) -> Cost {
        (self.0)(state, problem)
    }
}

/// What a graph search found.
///
/// "No path exists" is a normal return value, never an error: it comes back
/// as `solved == false` with an empty `actions`. A start state that already
/// satisfies the goal test also yields empty `actions`, but with
/// `solved == true`; the flag is what tells the two apart.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "P::Action: serde::Serialize",
        deserialize = "P::Action: serde::Deserialize<'de>"
    ))
)]
pub struct SearchOutcome<P: SearchProblem> {
    pub solved: bool,
    /// Actions from the start state to the goal, oldest first.
    pub actions: Vec<P::Action>,
    /// Path cost of the returned plan. `Cost::ZERO` when `actions` is empty.
    pub cost: Cost,
    pub counter: SearchCounter,
}

impl<P: SearchProblem> SearchOutcome<P> {
    #[inline]
    pub fn failure(counter: SearchCounter) -> Self {
        SearchOutcome {
            solved: false,
            actions: Vec::new(),
            cost: Cost::ZERO,
            counter,
        }
    }
}
