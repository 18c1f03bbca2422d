//! Runtime engine.
//!
//! `GameEngine` owns a `GameState` and applies the pure transitions from
//! `crate::rules`, adding the one piece of time-dependent behavior: the
//! deferred, cancellable clear of a mismatched pair.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::core::{Board, GameConfig, GameRng, GameState, SymbolId};
//! use memory_match::engine::GameEngine;
//!
//! let (a, b) = (SymbolId::new(0), SymbolId::new(1));
//! let board = Board::from_cells([a, b, a, b]).unwrap();
//! let mut engine = GameEngine::from_state(
//!     GameConfig::default(),
//!     GameRng::new(7),
//!     GameState::with_board(board),
//! ).unwrap();
//!
//! engine.tap_card(0).unwrap();
//! engine.tap_card(1).unwrap();
//! assert_eq!(engine.state().selection(), &[0, 1]);
//!
//! // A reset before the delay expires cancels the clear.
//! let stale = engine.pending_clear().unwrap();
//! engine.reset().unwrap();
//! assert!(!engine.fire_clear(stale));
//! ```

mod game;
mod timer;

pub use game::GameEngine;
pub use timer::{ClearScheduler, ClearTicket, PendingClear};
