//! Core engine types: symbols, boards, state, tap outcomes, RNG, configuration.
//!
//! Everything here is presentation-agnostic. The rules in `crate::rules`
//! transform these types; `crate::engine` owns them at runtime.

pub mod symbol;
pub mod error;
pub mod rng;
pub mod config;
pub mod board;
pub mod action;
pub mod state;

pub use symbol::{SymbolId, SymbolSet, DEFAULT_GLYPHS};
pub use error::{ConfigError, EngineError};
pub use rng::{fisher_yates, GameRng, GameRngState, IndexSource};
pub use config::{GameConfig, DEFAULT_BASE_PAIRS, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_PAIRS_PER_LEVEL};
pub use board::{generate_board, Board};
pub use action::{IgnoreReason, TapOutcome};
pub use state::{GameState, Selection};
