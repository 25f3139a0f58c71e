//! A small, fully explicit adjacency-list state space.
//!
//! State and action names are interned to dense ids so the search state type
//! stays `Copy`. Mostly useful for tests and for spelling out toy domains
//! without writing a `SearchProblem` by hand.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::problem::{Cost, SearchProblem, Successor, SuccessorList};

/// Interned id of a graph state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(pub(crate) u32);

/// Interned id of an edge action label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub(crate) u32);

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown name `{0}`")]
    UnknownName(String),
    #[error("duplicate node `{0}`")]
    DuplicateNode(String),
    #[error("negative step cost {cost} on edge `{from}` -> `{to}`")]
    NegativeCost { from: String, to: String, cost: f64 },
    #[error("start node was not set")]
    MissingStart,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Edge {
    to: StateId,
    action: ActionId,
    cost: Cost,
}

/// A directed graph with labeled, non-negatively weighted edges, a start
/// state and a set of goal states. Implements [`SearchProblem`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplicitGraph {
    state_names: Vec<String>,
    action_names: Vec<String>,
    /// Outgoing edges, indexed by `StateId`.
    edges: Vec<Vec<Edge>>,
    start: StateId,
    goals: FxHashSet<StateId>,
}

impl ExplicitGraph {
    pub fn builder() -> ExplicitGraphBuilder {
        ExplicitGraphBuilder::default()
    }

    pub fn state_id(&self, name: &str) -> Result<StateId, GraphError> {
        self.state_names
            .iter()
            .position(|n| n == name)
            .map(|i| StateId(i as u32))
            .ok_or_else(|| GraphError::UnknownName(name.to_string()))
    }

    pub fn action_id(&self, name: &str) -> Result<ActionId, GraphError> {
        self.action_names
            .iter()
            .position(|n| n == name)
            .map(|i| ActionId(i as u32))
            .ok_or_else(|| GraphError::UnknownName(name.to_string()))
    }

    pub fn state_name(&self, id: StateId) -> &str {
        &self.state_names[id.0 as usize]
    }

    pub fn action_name(&self, id: ActionId) -> &str {
        &self.action_names[id.0 as usize]
    }

    /// Readable rendering of a plan, for assertions and debug output.
    pub fn action_names_of(&self, actions: &[ActionId]) -> Vec<&str> {
        actions.iter().map(|&a| self.action_name(a)).collect()
    }

    pub fn num_states(&self) -> usize {
        self.state_names.len()
    }
}

impl SearchProblem for ExplicitGraph {
    type State = StateId;
    type Action = ActionId;

    fn start_state(&self) -> StateId {
        self.start
    }

    fn is_goal_state(&self, state: &StateId) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &StateId) -> SuccessorList<StateId, ActionId> {
        self.edges[state.0 as usize]
            .iter()
            .map(|edge| Successor {
                state: edge.to,
                action: edge.action,
                cost: edge.cost,
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[ActionId]) -> Option<Cost> {
        let mut state = self.start;
        let mut total = Cost::ZERO;
        for &action in actions {
            let edge = self.edges[state.0 as usize]
                .iter()
                .find(|edge| edge.action == action)?;
            total += edge.cost;
            state = edge.to;
        }
        Some(total)
    }
}

/// Builds an [`ExplicitGraph`]. Nodes are interned on first mention; edges
/// are validated for non-negative cost as they are added.
#[derive(Debug, Default)]
pub struct ExplicitGraphBuilder {
    state_names: Vec<String>,
    state_index: FxHashMap<String, StateId>,
    action_names: Vec<String>,
    action_index: FxHashMap<String, ActionId>,
    edges: Vec<Vec<Edge>>,
    start: Option<StateId>,
    goals: FxHashSet<StateId>,
}

impl ExplicitGraphBuilder {
    fn intern_state(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.state_index.get(name) {
            return id;
        }
        let id = StateId(self.state_names.len() as u32);
        self.state_names.push(name.to_string());
        self.state_index.insert(name.to_string(), id);
        self.edges.push(Vec::new());
        id
    }

    fn intern_action(&mut self, name: &str) -> ActionId {
        if let Some(&id) = self.action_index.get(name) {
            return id;
        }
        let id = ActionId(self.action_names.len() as u32);
        self.action_names.push(name.to_string());
        self.action_index.insert(name.to_string(), id);
        id
    }

    /// Declares a node explicitly. Errors if the name is already known;
    /// use this for isolated states that no edge would otherwise mention.
    pub fn node(&mut self, name: &str) -> Result<StateId, GraphError> {
        if self.state_index.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }
        Ok(self.intern_state(name))
    }

    pub fn edge(&mut self, from: &str, to: &str, action: &str, cost: f64) -> Result<(), GraphError> {
        if cost < 0.0 {
            return Err(GraphError::NegativeCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        }
        let from = self.intern_state(from);
        let to = self.intern_state(to);
        let action = self.intern_action(action);
        self.edges[from.0 as usize].push(Edge {
            to,
            action,
            cost: Cost(cost),
        });
        Ok(())
    }

    pub fn start(&mut self, name: &str) -> &mut Self {
        let id = self.intern_state(name);
        self.start = Some(id);
        self
    }

    pub fn goal(&mut self, name: &str) -> &mut Self {
        let id = self.intern_state(name);
        self.goals.insert(id);
        self
    }

    pub fn build(self) -> Result<ExplicitGraph, GraphError> {
        let start = self.start.ok_or(GraphError::MissingStart)?;
        Ok(ExplicitGraph {
            state_names: self.state_names,
            action_names: self.action_names,
            edges: self.edges,
            start,
            goals: self.goals,
        })
    }
}
