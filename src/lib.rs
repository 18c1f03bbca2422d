//! # memory-match
//!
//! A deterministic, presentation-agnostic engine for the pair-matching
//! (concentration) game.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: One `GameState` aggregate, mutated only by the
//!    engine. Renderers see read-only snapshots.
//!
//! 2. **Pure Rules**: Taps, level advances and resets are functions from
//!    state to state. Randomness enters only through `IndexSource`.
//!
//! 3. **Explicit Time**: The mismatch clear is a cancellable deferred task
//!    with generation-tagged tickets, never a side effect of rendering.
//!
//! ## Game Rules
//!
//! - Level `n` deals `3 + (n - 1)` pairs from the symbol catalog, shuffled
//! - Tap two cards: a match stays face-up and scores 1
//! - A mismatch stays face-up for 1000ms, then turns back down
//! - Clearing the board scores a bonus of 1 and deals the next level
//!
//! ## Modules
//!
//! - `core`: Symbols, boards, state, outcomes, RNG, configuration, errors
//! - `rules`: Pure state transitions
//! - `engine`: `GameEngine` and the mismatch-clear scheduler
//! - `view`: Snapshots, the `Renderer` trait and a card-size hint

pub mod core;
pub mod rules;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    SymbolId, SymbolSet,
    GameRng, GameRngState, IndexSource,
    GameConfig, ConfigError, EngineError,
    Board, generate_board,
    GameState, TapOutcome, IgnoreReason,
};

pub use crate::engine::{GameEngine, ClearTicket};

pub use crate::view::{GameSnapshot, CellView, Renderer};
