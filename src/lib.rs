#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// The single-agent search problem contract and its plan/outcome types.
pub mod problem;

/// The multi-agent game-tree contract and its result types.
pub mod game_tree;

/// Bookkeeping counters shared by every search algorithm.
pub mod stats;

/// An adjacency-list search problem for tests and small domains.
pub mod explicit_graph;

/// A scripted game tree for exercising adversarial searchers.
pub mod scripted;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` crate
pub use rand;

pub mod prelude {
    pub use crate::data_structures::{ActionList, LinkedList};
    pub use crate::explicit_graph::{ExplicitGraph, ExplicitGraphBuilder, GraphError};
    pub use crate::game_tree::{
        AgentIndex, Evaluator, FnEvaluator, GameTree, GameTreeSearch, ScoreEvaluator,
        SearchResult, Value, PV,
    };
    pub use crate::problem::{
        Cost, FnHeuristic, Heuristic, NullHeuristic, SearchOutcome, SearchProblem, Successor,
        SuccessorList,
    };
    pub use crate::scripted::{ScriptedMove, ScriptedState, ScriptedTree, ScriptedTreeBuilder};
    pub use crate::stats::SearchCounter;
}

#[cfg(test)]
mod tests;
