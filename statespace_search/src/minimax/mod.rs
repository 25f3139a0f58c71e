pub mod search;

pub use crate::minimax::search::{AlphaBetaSearch, MinimaxConfig, MinimaxSearch};
