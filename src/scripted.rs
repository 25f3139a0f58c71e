//! A game tree spelled out node by node.
//!
//! Agents move round-robin down the tree: every level of depth belongs to
//! the next agent index. Each node carries the score the evaluator reports
//! if the search cuts off there, and may be marked as a win or loss.

use std::sync::Arc;

use crate::data_structures::ActionList;
use crate::game_tree::{AgentIndex, GameTree, Value};

/// A move label in a scripted tree. Labels are per-node: `internal` assigns
/// `0..n` to its children in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptedMove(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Live,
    Win,
    Lose,
}

#[derive(Debug, Clone)]
struct ScriptedNode {
    score: Value,
    outcome: Outcome,
    children: Vec<(ScriptedMove, u32)>,
}

#[derive(Debug)]
pub struct ScriptedTree {
    num_agents: AgentIndex,
    nodes: Vec<ScriptedNode>,
    root: u32,
}

impl ScriptedTree {
    pub fn builder(num_agents: AgentIndex) -> ScriptedTreeBuilder {
        ScriptedTreeBuilder {
            num_agents,
            nodes: Vec::new(),
        }
    }

    /// The state at the root of the tree.
    pub fn start(self: &Arc<Self>) -> ScriptedState {
        ScriptedState {
            tree: Arc::clone(self),
            node: self.root,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Builds a [`ScriptedTree`] bottom-up: create leaves first, then wire them
/// into internal nodes, then `build` with the root's id.
#[derive(Debug)]
pub struct ScriptedTreeBuilder {
    num_agents: AgentIndex,
    nodes: Vec<ScriptedNode>,
}

impl ScriptedTreeBuilder {
    fn push(&mut self, score: f64, outcome: Outcome, children: Vec<(ScriptedMove, u32)>) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(ScriptedNode {
            score: Value(score),
            outcome,
            children,
        });
        id
    }

    pub fn leaf(&mut self, score: f64) -> u32 {
        self.push(score, Outcome::Live, Vec::new())
    }

    pub fn win(&mut self, score: f64) -> u32 {
        self.push(score, Outcome::Win, Vec::new())
    }

    pub fn lose(&mut self, score: f64) -> u32 {
        self.push(score, Outcome::Lose, Vec::new())
    }

    pub fn internal(&mut self, score: f64, children: &[u32]) -> u32 {
        let children = children
            .iter()
            .enumerate()
            .map(|(i, &child)| (ScriptedMove(i as u8), child))
            .collect();
        self.push(score, Outcome::Live, children)
    }

    pub fn build(self, root: u32) -> Arc<ScriptedTree> {
        assert!((root as usize) < self.nodes.len(), "root node does not exist");
        Arc::new(ScriptedTree {
            num_agents: self.num_agents,
            nodes: self.nodes,
            root,
        })
    }
}

/// A position inside a [`ScriptedTree`]. The tree is shared, the position
/// is a single node id, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct ScriptedState {
    tree: Arc<ScriptedTree>,
    node: u32,
}

impl ScriptedState {
    fn node(&self) -> &ScriptedNode {
        &self.tree.nodes[self.node as usize]
    }
}

impl GameTree for ScriptedState {
    type Action = ScriptedMove;
    type Actions = ActionList<ScriptedMove>;

    fn num_agents(&self) -> AgentIndex {
        self.tree.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Self::Actions {
        self.node().children.iter().map(|&(mv, _)| mv).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: ScriptedMove) -> Self {
        let &(_, child) = self
            .node()
            .children
            .iter()
            .find(|&&(mv, _)| mv == action)
            .expect("scripted successor: move is not legal here");
        ScriptedState {
            tree: Arc::clone(&self.tree),
            node: child,
        }
    }

    fn is_win(&self) -> bool {
        self.node().outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.node().outcome == Outcome::Lose
    }

    fn score(&self) -> Value {
        self.node().score
    }
}
