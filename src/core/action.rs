//! Results of a card tap.
//!
//! Every accepted tap produces a `TapOutcome` telling the caller which
//! branch of the turn state machine was taken:
//!
//! ```text
//! EMPTY_SELECTION -> ONE_SELECTED -> MATCHED_RESOLVED  -> EMPTY_SELECTION
//!                                 \-> MISMATCH_PENDING -> EMPTY_SELECTION
//! MATCHED_RESOLVED (board cleared) -> LEVEL_ADVANCED
//! ```

use serde::{Deserialize, Serialize};

/// Why a tap changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The card is already part of a matched pair.
    AlreadyMatched,
    /// The card is already face-up this turn.
    AlreadySelected,
    /// Two mismatched cards are waiting to be turned back down.
    ResolutionPending,
}

/// What a tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapOutcome {
    /// No state change.
    Ignored(IgnoreReason),

    /// First card of the turn turned face-up.
    Revealed { index: usize },

    /// The two cards match and stay face-up.
    Matched { first: usize, second: usize },

    /// The two cards differ; they stay face-up until the clear fires.
    Mismatched { first: usize, second: usize },

    /// The match cleared the board and the next level was dealt.
    LevelAdvanced { first: usize, second: usize, level: u32 },
}

impl TapOutcome {
    /// Did the tap change the state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TapOutcome::Ignored(_))
    }

    /// Did the tap confirm a pair (including the level-clearing one)?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, TapOutcome::Matched { .. } | TapOutcome::LevelAdvanced { .. })
    }

    /// Does the caller need to schedule a selection clear?
    #[must_use]
    pub fn needs_clear(&self) -> bool {
        matches!(self, TapOutcome::Mismatched { .. })
    }
}
