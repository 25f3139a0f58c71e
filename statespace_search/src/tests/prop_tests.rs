use std::sync::Arc;

use proptest::prelude::*;

use statespace::explicit_graph::{ExplicitGraph, StateId};
use statespace::game_tree::GameTreeSearch;
use statespace::problem::{Cost, FnHeuristic, NullHeuristic, SearchProblem};
use statespace::scripted::ScriptedTree;

use super::replay;
use crate::expectimax::{ExpectimaxConfig, ExpectimaxSearch};
use crate::graph::{astar_search, breadth_first_search, depth_first_search, uniform_cost_search};
use crate::minimax::{AlphaBetaSearch, MinimaxConfig, MinimaxSearch};

const CASES: u32 = 64;

fn build_graph(n: usize, edges: &[(usize, usize, u8)]) -> ExplicitGraph {
    let mut b = ExplicitGraph::builder();
    for i in 0..n {
        b.node(&format!("n{i}")).unwrap();
    }
    for (i, &(u, v, w)) in edges.iter().enumerate() {
        b.edge(&format!("n{u}"), &format!("n{v}"), &format!("e{i}"), w as f64)
            .unwrap();
    }
    b.start("n0").goal(&format!("n{}", n - 1));
    b.build().unwrap()
}

/// Reference single-source distances (Bellman-Ford; no negative costs here,
/// so n rounds of relaxation converge).
fn bellman(n: usize, edges: &[(usize, usize, u8)], unit: bool, source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        for &(u, v, w) in edges {
            let w = if unit { 1.0 } else { w as f64 };
            if dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
            }
        }
    }
    dist
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (2usize..7).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 1u8..10), 0..20),
        )
    })
}

/// A uniform tree: every internal node has `branching` children, leaves
/// carry the given scores, agents rotate one level per index.
fn build_uniform_tree(agents: u8, branching: usize, scores: &[f64]) -> Arc<ScriptedTree> {
    let mut b = ScriptedTree::builder(agents);
    let mut level: Vec<u32> = scores.iter().map(|&s| b.leaf(s)).collect();
    while level.len() > 1 {
        level = level
            .chunks(branching)
            .map(|chunk| b.internal(0.0, chunk))
            .collect();
    }
    b.build(level[0])
}

fn arb_tree() -> impl Strategy<Value = (Arc<ScriptedTree>, u8)> {
    (1u8..3, 1u8..5, 2usize..6)
        .prop_filter("tree too large", |&(agents, plies, branching)| {
            branching.pow((agents * plies) as u32) <= 4096
        })
        .prop_flat_map(|(agents, plies, branching)| {
            let leaves = branching.pow((agents * plies) as u32);
            (
                prop::collection::vec(-100.0f64..100.0, leaves),
                Just(agents),
                Just(plies),
                Just(branching),
            )
                .prop_map(|(scores, agents, plies, branching)| {
                    (build_uniform_tree(agents, branching, &scores), plies)
                })
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn uniform_cost_search_is_optimal((n, edges) in arb_graph()) {
        let g = build_graph(n, &edges);
        let dist = bellman(n, &edges, false, 0);
        let outcome = uniform_cost_search(&g);
        prop_assert_eq!(dist[n - 1].is_finite(), outcome.solved);
        if outcome.solved {
            prop_assert!((outcome.cost.value() - dist[n - 1]).abs() < 1e-9);
            let end = replay(&g, &outcome.actions);
            prop_assert!(g.is_goal_state(&end));
        }
    }

    #[test]
    fn breadth_first_search_finds_fewest_edges((n, edges) in arb_graph()) {
        let g = build_graph(n, &edges);
        let hops = bellman(n, &edges, true, 0);
        let outcome = breadth_first_search(&g);
        prop_assert_eq!(hops[n - 1].is_finite(), outcome.solved);
        if outcome.solved {
            prop_assert_eq!(hops[n - 1] as usize, outcome.actions.len());
            let end = replay(&g, &outcome.actions);
            prop_assert!(g.is_goal_state(&end));
        }
    }

    #[test]
    fn depth_first_search_reaches_the_goal_when_reachable((n, edges) in arb_graph()) {
        let g = build_graph(n, &edges);
        let hops = bellman(n, &edges, true, 0);
        let outcome = depth_first_search(&g);
        prop_assert_eq!(hops[n - 1].is_finite(), outcome.solved);
        if outcome.solved {
            let end = replay(&g, &outcome.actions);
            prop_assert!(g.is_goal_state(&end));
        }
    }

    #[test]
    fn astar_with_zero_heuristic_is_uniform_cost((n, edges) in arb_graph()) {
        let g = build_graph(n, &edges);
        let ucs = uniform_cost_search(&g);
        let astar = astar_search(&g, &NullHeuristic);
        prop_assert_eq!(ucs.solved, astar.solved);
        prop_assert_eq!(ucs.actions, astar.actions);
        prop_assert_eq!(ucs.counter, astar.counter);
    }

    #[test]
    fn astar_with_a_consistent_heuristic_is_optimal((n, edges) in arb_graph()) {
        let g = build_graph(n, &edges);
        let dist = bellman(n, &edges, false, 0);
        // True remaining cost to the goal: consistent and admissible.
        let reversed: Vec<(usize, usize, u8)> =
            edges.iter().map(|&(u, v, w)| (v, u, w)).collect();
        let to_goal = bellman(n, &reversed, false, n - 1);
        let h = FnHeuristic(move |state: &StateId, g: &ExplicitGraph| {
            let index: usize = g.state_name(*state)[1..].parse().expect("generated node name");
            Cost(to_goal[index])
        });
        let outcome = astar_search(&g, &h);
        prop_assert_eq!(dist[n - 1].is_finite(), outcome.solved);
        if outcome.solved {
            prop_assert!((outcome.cost.value() - dist[n - 1]).abs() < 1e-9);
        }
    }

    #[test]
    fn alpha_beta_agrees_with_minimax((tree, plies) in arb_tree()) {
        let start = tree.start();
        let mm = MinimaxSearch::new(MinimaxConfig::depth(plies)).search(&start);
        let ab = AlphaBetaSearch::new(MinimaxConfig::depth(plies)).search(&start);
        prop_assert_eq!(mm.value, ab.value);
        prop_assert_eq!(mm.pv.head(), ab.pv.head());
        // Pruning only ever skips work.
        prop_assert!(ab.counter.states_visited <= mm.counter.states_visited);
    }

    #[test]
    fn expectimax_computes_the_exact_recursive_mean(
        (branching, scores) in (2usize..6).prop_flat_map(|b| {
            (Just(b), prop::collection::vec(-50.0f64..50.0, b * b))
        })
    ) {
        let tree = build_uniform_tree(2, branching, &scores);
        let result = ExpectimaxSearch::new(ExpectimaxConfig::depth(1)).search(&tree.start());
        let expected = scores
            .chunks(branching)
            .map(|chunk| chunk.iter().sum::<f64>() / branching as f64)
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((result.value.value() - expected).abs() < 1e-9);
    }
}
