//! Game state aggregate.
//!
//! ## GameState
//!
//! The single unit the engine mutates:
//! - Level and score
//! - Board
//! - Selection (face-up, unresolved cards of the current turn)
//! - Matched set (confirmed pairs)
//! - Revealed history (cards turned up at least once on this board)
//!
//! Sets use `im` persistent structures so that handing a copy to a
//! renderer or keeping the previous state around is O(1).

use im::OrdSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::config::GameConfig;
use super::error::EngineError;

/// Card indices selected during the current turn.
///
/// Holds 2 entries only while a mismatch is waiting to be cleared.
pub type Selection = SmallVec<[usize; 2]>;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) level: u32,
    pub(crate) score: u64,
    pub(crate) board: Board,
    pub(crate) selection: Selection,
    pub(crate) matched: OrdSet<usize>,
    pub(crate) revealed: OrdSet<usize>,
}

impl GameState {
    /// Fresh state for `board` with nothing selected or matched.
    #[must_use]
    pub fn new(level: u32, score: u64, board: Board) -> Self {
        Self {
            level,
            score,
            board,
            selection: SmallVec::new(),
            matched: OrdSet::new(),
            revealed: OrdSet::new(),
        }
    }

    /// Level-1, zero-score state for `board`.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self::new(1, 0, board)
    }

    /// Current level (starts at 1).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The board in play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.board.len()
    }

    /// Selected indices in tap order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Matched indices.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<usize> {
        &self.matched
    }

    /// Indices turned face-up at least once on this board.
    #[must_use]
    pub fn revealed(&self) -> &OrdSet<usize> {
        &self.revealed
    }

    /// Is `index` face-up and unresolved?
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Is `index` part of a confirmed pair?
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    /// Has `index` ever been turned over on this board?
    #[must_use]
    pub fn was_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Is a mismatched pair waiting to be turned back down?
    #[must_use]
    pub fn is_mismatch_pending(&self) -> bool {
        self.selection.len() == 2
    }

    /// Every card on the board is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched.len() == self.board.len()
    }

    /// Check that this state could have been reached by play under `config`.
    ///
    /// States built by the rules always pass. Loaded or hand-edited states
    /// may not, and the engine refuses to resume from those.
    pub fn validate(&self, config: &GameConfig) -> Result<(), EngineError> {
        if self.level == 0 {
            return Err(EngineError::InvalidLevel { level: self.level });
        }
        let max_level = config.max_level();
        if self.level > max_level {
            return Err(EngineError::LevelUnsupported { level: self.level, max_level });
        }

        if let Some(symbol) = self.board.iter().find(|&s| config.symbols.glyph(s).is_none()) {
            return Err(EngineError::UnknownSymbol { symbol });
        }
        self.board.check_pairs()?;

        let card_count = self.board.len();
        let mut indices = self.selection.iter().chain(self.matched.iter()).chain(self.revealed.iter());
        if let Some(&index) = indices.find(|&&i| i >= card_count) {
            return Err(EngineError::IndexOutOfRange { index, card_count });
        }

        let invalid_selection = match self.selection.as_slice() {
            [] => false,
            [only] => self.is_matched(*only),
            [first, second] => {
                first == second
                    || self.is_matched(*first)
                    || self.is_matched(*second)
                    || self.board.get(*first) == self.board.get(*second)
            }
            _ => true,
        };
        if invalid_selection {
            return Err(EngineError::InvalidSelection {
                selection: self.selection.to_vec(),
            });
        }

        // Matched cards come in complete pairs.
        let mut matched_per_symbol = FxHashMap::default();
        for &index in self.matched.iter() {
            if let Some(symbol) = self.board.get(index) {
                matched_per_symbol.entry(symbol).or_insert_with(Vec::new).push(index);
            }
        }
        let mut lone: Vec<usize> = matched_per_symbol
            .values()
            .filter(|cards| cards.len() != 2)
            .map(|cards| cards[0])
            .collect();
        lone.sort_unstable();
        if let Some(&index) = lone.first() {
            return Err(EngineError::UnpairedMatch { index });
        }

        Ok(())
    }
}
