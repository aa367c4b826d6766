//! Evaluation, search, and game sessions for penta.

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use config::EngineConfig;
pub use error::{EngineError, SearchError};
pub use eval::{Score, score_move};
pub use game::{EngineMove, Game, Outcome};
pub use search::control::SearchControl;
pub use search::{SearchResult, Searcher};
