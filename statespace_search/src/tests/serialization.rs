use crate::expectimax::ExpectimaxConfig;
use crate::greedy::GreedyConfig;
use crate::minimax::MinimaxConfig;

#[test]
fn minimax_config_round_trips() {
    let config = MinimaxConfig {
        depth: 3,
        debug: true,
    };
    let ser = serde_json::to_string(&config).unwrap();
    let config1: MinimaxConfig = serde_json::from_str(&ser).unwrap();
    assert_eq!(config.depth, config1.depth);
    assert_eq!(config.debug, config1.debug);
}

#[test]
fn expectimax_config_round_trips() {
    let config = ExpectimaxConfig {
        depth: 2,
        seed: 42,
        debug: false,
    };
    let ser = serde_json::to_string(&config).unwrap();
    let config1: ExpectimaxConfig = serde_json::from_str(&ser).unwrap();
    assert_eq!(config.depth, config1.depth);
    assert_eq!(config.seed, config1.seed);
}

#[test]
fn greedy_config_round_trips() {
    let config = GreedyConfig {
        seed: 7,
        debug: false,
    };
    let ser = serde_json::to_string(&config).unwrap();
    let config1: GreedyConfig = serde_json::from_str(&ser).unwrap();
    assert_eq!(config.seed, config1.seed);
}
