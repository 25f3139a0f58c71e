use statespace::game_tree::{
    AgentIndex, Evaluator, GameTree, GameTreeSearch, ScoreEvaluator, SearchResult, Value, PV,
};
use statespace::rand::rngs::SmallRng;
use statespace::rand::{Rng, SeedableRng};
use statespace::stats::SearchCounter;
use statespace::{cons, linked_list};

#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectimaxConfig {
    /// Search depth in full plies. One ply is one move by every agent.
    pub depth: u8,
    /// Seed for sampling the chance branch reported in the principal
    /// variation. The search value does not depend on it.
    pub seed: u64,
    pub debug: bool,
}

impl ExpectimaxConfig {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}

struct SearchContext<'a, E> {
    evaluator: &'a E,
    rng: SmallRng,
    counter: SearchCounter,
}

fn evaluate<G: GameTree, E: Evaluator<G>>(state: &G, ctx: &mut SearchContext<E>) -> (Value, PV<G>) {
    ctx.counter.evals += 1;
    (ctx.evaluator.evaluate(state), linked_list![])
}

/// Depth-limited expectimax. Agent 0 maximizes; every other agent is
/// modeled as choosing uniformly at random, so its node value is the exact
/// arithmetic mean of the child values. A chance node with no legal actions
/// is treated as terminal and evaluated directly, so the mean is never
/// taken over an empty set.
fn expectimax<G: GameTree, E: Evaluator<G>>(
    state: &G,
    agent: AgentIndex,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> (Value, PV<G>) {
    if depth == 0 || state.is_terminal() {
        return evaluate(state, ctx);
    }

    let num_agents = state.num_agents();
    ctx.counter.expansions += 1;

    if agent == 0 {
        let mut best: Option<(Value, G::Action, PV<G>)> = None;
        for action in state.legal_actions(agent) {
            let child = state.successor(agent, action);
            ctx.counter.states_visited += 1;
            let (value, line) = if agent + 1 < num_agents {
                expectimax(&child, agent + 1, depth, ctx)
            } else {
                expectimax(&child, 0, depth - 1, ctx)
            };
            let better = match &best {
                None => true,
                Some((best_value, _, _)) => value > *best_value,
            };
            if better {
                best = Some((value, action, line));
            }
        }
        match best {
            Some((value, action, line)) => (value, cons!(action, line)),
            None => evaluate(state, ctx),
        }
    } else {
        let mut branches: Vec<(G::Action, Value, PV<G>)> = Vec::new();
        for action in state.legal_actions(agent) {
            let child = state.successor(agent, action);
            ctx.counter.states_visited += 1;
            let (value, line) = if agent + 1 < num_agents {
                expectimax(&child, agent + 1, depth, ctx)
            } else {
                expectimax(&child, 0, depth - 1, ctx)
            };
            branches.push((action, value, line));
        }
        if branches.is_empty() {
            return evaluate(state, ctx);
        }
        let mean = branches.iter().map(|(_, v, _)| v.value()).sum::<f64>() / branches.len() as f64;
        // The opponent is uniform-random, so any branch is as representative
        // as any other; sample one for the reported line.
        let pick = ctx.rng.gen_range(0..branches.len());
        let (action, _, line) = branches.swap_remove(pick);
        (Value(mean), cons!(action, line))
    }
}

/// Depth-limited expectimax search against uniform-random opponents.
pub struct ExpectimaxSearch<E = ScoreEvaluator> {
    pub config: ExpectimaxConfig,
    pub evaluator: E,
}

impl ExpectimaxSearch {
    pub fn new(config: ExpectimaxConfig) -> Self {
        Self {
            config,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> ExpectimaxSearch<E> {
    pub fn with_evaluator(config: ExpectimaxConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: GameTree, E: Evaluator<G>> GameTreeSearch<G> for ExpectimaxSearch<E> {
    fn search(&mut self, position: &G) -> SearchResult<G> {
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            // Reseeded per call so repeated searches are reproducible.
            rng: SmallRng::seed_from_u64(self.config.seed),
            counter: SearchCounter::default(),
        };
        let (value, pv) = expectimax(position, 0, self.config.depth, &mut ctx);
        if self.config.debug {
            println!(
                "expectimax: depth={} value={value:?} | {}",
                self.config.depth,
                ctx.counter.summary()
            );
        }
        SearchResult::new(pv, value, ctx.counter)
    }
}
