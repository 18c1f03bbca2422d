//! Game rules as pure state transitions.
//!
//! The rules decide:
//! - What a tap does (reveal, match, mismatch, ignore)
//! - When the board is cleared
//! - How a level advance and a reset rebuild the state
//!
//! They never deal with time or rendering; `crate::engine` wraps them with
//! the mismatch-clear timer.

pub mod transitions;

pub use transitions::{
    advance_level, clear_selection, did_player_win, reset_game, tap_card, Transition,
};
