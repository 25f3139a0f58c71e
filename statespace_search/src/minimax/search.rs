use statespace::game_tree::{
    AgentIndex, Evaluator, GameTree, GameTreeSearch, ScoreEvaluator, SearchResult, Value, PV,
};
use statespace::stats::SearchCounter;
use statespace::{cons, linked_list};

#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimaxConfig {
    /// Search depth in full plies. One ply is one move by every agent.
    pub depth: u8,
    pub debug: bool,
}

impl MinimaxConfig {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            debug: false,
        }
    }
}

struct SearchContext<'a, E> {
    evaluator: &'a E,
    counter: SearchCounter,
}

fn evaluate<G: GameTree, E: Evaluator<G>>(state: &G, ctx: &mut SearchContext<E>) -> (Value, PV<G>) {
    ctx.counter.evals += 1;
    (ctx.evaluator.evaluate(state), linked_list![])
}

/// Depth-limited minimax. Agent 0 maximizes, every other agent minimizes;
/// `depth` drops by one after the last agent has moved. Ties go to the
/// first-encountered action at every level.
fn minimax<G: GameTree, E: Evaluator<G>>(
    state: &G,
    agent: AgentIndex,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> (Value, PV<G>) {
    if depth == 0 || state.is_terminal() {
        return evaluate(state, ctx);
    }

    let num_agents = state.num_agents();
    let maximizing = agent == 0;
    let mut best: Option<(Value, G::Action, PV<G>)> = None;
    ctx.counter.expansions += 1;
    for action in state.legal_actions(agent) {
        let child = state.successor(agent, action);
        ctx.counter.states_visited += 1;
        let (value, line) = if agent + 1 < num_agents {
            minimax(&child, agent + 1, depth, ctx)
        } else {
            minimax(&child, 0, depth - 1, ctx)
        };

        let better = match &best {
            None => true,
            Some((best_value, _, _)) => {
                if maximizing {
                    value > *best_value
                } else {
                    value < *best_value
                }
            }
        };
        if better {
            best = Some((value, action, line));
        }
    }

    match best {
        Some((value, action, line)) => (value, cons!(action, line)),
        // A state with no legal actions is terminal for search purposes.
        None => evaluate(state, ctx),
    }
}

/// Minimax with alpha-beta bounds. Pruning uses strict inequalities
/// (`value > beta` at max nodes, `value < alpha` at min nodes), so the
/// value and the chosen root action are identical to plain [`minimax`]:
/// the root searches the full window and never prunes, and values equal to
/// a bound are not cut.
fn alpha_beta<G: GameTree, E: Evaluator<G>>(
    state: &G,
    agent: AgentIndex,
    depth: u8,
    mut alpha: Value,
    mut beta: Value,
    ctx: &mut SearchContext<'_, E>,
) -> (Value, PV<G>) {
    if depth == 0 || state.is_terminal() {
        return evaluate(state, ctx);
    }

    let num_agents = state.num_agents();
    let maximizing = agent == 0;
    let mut best: Option<(Value, G::Action, PV<G>)> = None;
    ctx.counter.expansions += 1;
    for action in state.legal_actions(agent) {
        let child = state.successor(agent, action);
        ctx.counter.states_visited += 1;
        let (value, line) = if agent + 1 < num_agents {
            alpha_beta(&child, agent + 1, depth, alpha, beta, ctx)
        } else {
            alpha_beta(&child, 0, depth - 1, alpha, beta, ctx)
        };

        let better = match &best {
            None => true,
            Some((best_value, _, _)) => {
                if maximizing {
                    value > *best_value
                } else {
                    value < *best_value
                }
            }
        };
        if better {
            best = Some((value, action, line));
        }

        if maximizing {
            if value > beta {
                ctx.counter.beta_prunes += 1;
                break;
            }
            alpha = alpha.max(value);
        } else {
            if value < alpha {
                ctx.counter.beta_prunes += 1;
                break;
            }
            beta = beta.min(value);
        }
    }

    match best {
        Some((value, action, line)) => (value, cons!(action, line)),
        None => evaluate(state, ctx),
    }
}

/// Full-width depth-limited minimax search.
pub struct MinimaxSearch<E = ScoreEvaluator> {
    pub config: MinimaxConfig,
    pub evaluator: E,
}

impl MinimaxSearch {
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> MinimaxSearch<E> {
    pub fn with_evaluator(config: MinimaxConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: GameTree, E: Evaluator<G>> GameTreeSearch<G> for MinimaxSearch<E> {
    fn search(&mut self, position: &G) -> SearchResult<G> {
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            counter: SearchCounter::default(),
        };
        let (value, pv) = minimax(position, 0, self.config.depth, &mut ctx);
        if self.config.debug {
            println!(
                "minimax: depth={} value={value:?} | {}",
                self.config.depth,
                ctx.counter.summary()
            );
        }
        SearchResult::new(pv, value, ctx.counter)
    }
}

/// Minimax with alpha-beta pruning. Same results as [`MinimaxSearch`],
/// fewer visited states.
pub struct AlphaBetaSearch<E = ScoreEvaluator> {
    pub config: MinimaxConfig,
    pub evaluator: E,
}

impl AlphaBetaSearch {
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> AlphaBetaSearch<E> {
    pub fn with_evaluator(config: MinimaxConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: GameTree, E: Evaluator<G>> GameTreeSearch<G> for AlphaBetaSearch<E> {
    fn search(&mut self, position: &G) -> SearchResult<G> {
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            counter: SearchCounter::default(),
        };
        let (value, pv) = alpha_beta(
            position,
            0,
            self.config.depth,
            Value::MIN,
            Value::MAX,
            &mut ctx,
        );
        if self.config.debug {
            println!(
                "alpha-beta: depth={} value={value:?} | {}",
                self.config.depth,
                ctx.counter.summary()
            );
        }
        SearchResult::new(pv, value, ctx.counter)
    }
}
