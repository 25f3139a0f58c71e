use itertools::Itertools;

use statespace::game_tree::{
    Evaluator, GameTree, GameTreeSearch, ScoreEvaluator, SearchResult, Value,
};
use statespace::linked_list;
use statespace::rand::rngs::SmallRng;
use statespace::rand::{Rng, SeedableRng};
use statespace::stats::SearchCounter;

#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Seed for breaking exact ties among the best-scoring actions.
    pub seed: u64,
    pub debug: bool,
}

/// One-step lookahead: evaluate the successor of every legal root action
/// and take the argmax, breaking exact ties uniformly at random.
pub struct GreedySearch<E = ScoreEvaluator> {
    pub config: GreedyConfig,
    pub evaluator: E,
}

impl GreedySearch {
    pub fn new(config: GreedyConfig) -> Self {
        Self {
            config,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> GreedySearch<E> {
    pub fn with_evaluator(config: GreedyConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: GameTree, E: Evaluator<G>> GameTreeSearch<G> for GreedySearch<E> {
    fn search(&mut self, position: &G) -> SearchResult<G> {
        let mut counter = SearchCounter::default();
        counter.expansions += 1;

        let mut scored: Vec<(G::Action, Value)> = Vec::new();
        for action in position.legal_actions(0) {
            let child = position.successor(0, action);
            counter.states_visited += 1;
            counter.evals += 1;
            scored.push((action, self.evaluator.evaluate(&child)));
        }

        if scored.is_empty() {
            counter.evals += 1;
            return SearchResult::new(linked_list![], self.evaluator.evaluate(position), counter);
        }

        let best = scored.into_iter().max_set_by(|a, b| a.1.cmp(&b.1));
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let (action, value) = best[rng.gen_range(0..best.len())];
        if self.config.debug {
            println!(
                "greedy: value={value:?}, tied_best={} | {}",
                best.len(),
                counter.summary()
            );
        }
        SearchResult::new(linked_list![action], value, counter)
    }
}
