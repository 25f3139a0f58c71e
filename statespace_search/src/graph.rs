use rustc_hash::FxHashSet;

use statespace::problem::{Cost, Heuristic, SearchOutcome, SearchProblem};
use statespace::stats::SearchCounter;

use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};

/// Index of a node in the search arena.
pub type NodeId = usize;

/// One arena entry. Nodes are immutable once created and `parent` always
/// points at an earlier entry, so walking parent links terminates at the
/// root.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    pub state: S,
    /// The action that produced this node. `None` only at the root.
    pub action: Option<A>,
    /// Cumulative cost from the start state. Heuristic estimates are never
    /// folded in here; they only influence frontier priorities.
    pub path_cost: Cost,
    pub parent: Option<NodeId>,
}

/// The shared traversal skeleton behind the four search instantiations.
///
/// `priority` maps `(state, cumulative cost)` to the key the frontier is
/// pushed with; structural frontiers ignore it.
///
/// States are expanded at most once: the first time a state is popped it is
/// added to the explored set and any later pop of the same state is skipped,
/// even if the rediscovery reached it more cheaply. Duplicates may therefore
/// sit in the frontier, and only expansion consults the explored set.
pub fn graph_search<P, F, K>(problem: &P, mut frontier: F, mut priority: K) -> SearchOutcome<P>
where
    P: SearchProblem,
    F: Frontier<NodeId>,
    K: FnMut(&P::State, Cost) -> Cost,
{
    let mut counter = SearchCounter::default();
    let start = problem.start_state();
    if problem.is_goal_state(&start) {
        return SearchOutcome {
            solved: true,
            actions: Vec::new(),
            cost: Cost::ZERO,
            counter,
        };
    }

    let start_key = priority(&start, Cost::ZERO);
    let mut arena: Vec<SearchNode<P::State, P::Action>> = vec![SearchNode {
        state: start,
        action: None,
        path_cost: Cost::ZERO,
        parent: None,
    }];
    counter.states_visited += 1;
    frontier.push(0, start_key);

    let mut explored: FxHashSet<P::State> = FxHashSet::default();

    while let Some(id) = frontier.pop() {
        let (state, path_cost) = {
            let node = &arena[id];
            (node.state.clone(), node.path_cost)
        };

        if problem.is_goal_state(&state) {
            return SearchOutcome {
                solved: true,
                actions: reconstruct(&arena, id),
                cost: path_cost,
                counter,
            };
        }

        if !explored.insert(state.clone()) {
            continue;
        }
        counter.expansions += 1;

        for succ in problem.successors(&state) {
            let child_cost = path_cost + succ.cost;
            let key = priority(&succ.state, child_cost);
            arena.push(SearchNode {
                state: succ.state,
                action: Some(succ.action),
                path_cost: child_cost,
                parent: Some(id),
            });
            counter.states_visited += 1;
            frontier.push(arena.len() - 1, key);
        }
    }

    SearchOutcome::failure(counter)
}

/// Actions along the parent chain from the root to `goal`, oldest first.
fn reconstruct<S, A: Copy>(arena: &[SearchNode<S, A>], goal: NodeId) -> Vec<A> {
    let mut actions = Vec::new();
    let mut id = goal;
    while let (Some(action), Some(parent)) = (arena[id].action, arena[id].parent) {
        actions.push(action);
        id = parent;
    }
    actions.reverse();
    actions
}

/// Search the deepest nodes in the search tree first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P> {
    graph_search(problem, StackFrontier::default(), |_, _| Cost::ZERO)
}

/// Search the shallowest nodes in the search tree first.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P> {
    graph_search(problem, QueueFrontier::default(), |_, _| Cost::ZERO)
}

/// Search the node of least cumulative cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P> {
    graph_search(problem, PriorityFrontier::default(), |_, path_cost| path_cost)
}

/// Search the node of least cumulative cost plus estimated remaining cost
/// first. The estimate is recomputed per generated node, never accumulated.
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> SearchOutcome<P>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    graph_search(problem, PriorityFrontier::default(), |state, path_cost| {
        path_cost + heuristic.estimate(state, problem)
    })
}
