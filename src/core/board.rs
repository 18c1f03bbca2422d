//! The card grid.
//!
//! A `Board` is an ordered sequence of symbol IDs in which every symbol
//! appears exactly twice. It is generated on game start, on reset and on
//! every level advance, and never mutated in between.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::EngineError;
use super::rng::{fisher_yates, IndexSource};
use super::symbol::SymbolId;

/// Shuffled pairs of symbols.
///
/// Backed by a persistent vector so snapshots and cloned states share it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<SymbolId>,
}

impl Board {
    /// Build a board from explicit cells.
    ///
    /// Fails unless every symbol present occurs exactly twice. Useful for
    /// fixed layouts in tests and replays.
    ///
    /// ```
    /// use memory_match::core::{Board, SymbolId};
    ///
    /// let a = SymbolId::new(0);
    /// let b = SymbolId::new(1);
    /// let board = Board::from_cells([a, b, a, b]).unwrap();
    /// assert_eq!(board.len(), 4);
    ///
    /// assert!(Board::from_cells([a, b, a]).is_err());
    /// ```
    pub fn from_cells(cells: impl IntoIterator<Item = SymbolId>) -> Result<Self, EngineError> {
        let board = Self {
            cells: cells.into_iter().collect(),
        };
        board.check_pairs()?;
        Ok(board)
    }

    /// Every symbol present occurs exactly twice.
    ///
    /// Deserialized boards skip `from_cells`, so loaders call this directly.
    pub fn check_pairs(&self) -> Result<(), EngineError> {
        let mut counts: Vec<_> = self.symbol_counts().into_iter().collect();
        counts.sort_unstable();
        match counts.iter().find(|(_, count)| *count != 2) {
            Some(&(symbol, count)) => Err(EngineError::UnpairedSymbol { symbol, count }),
            None => Ok(()),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a board built from no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SymbolId> {
        self.cells.get(index).copied()
    }

    /// Iterate over cells in board order.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.cells.iter().copied()
    }

    /// Occurrences of each symbol on the board.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for symbol in self.iter() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }
}

/// Generate a shuffled board for `level`.
///
/// Takes the first `pair_count(level)` symbols of the catalog, duplicates
/// them and applies a Fisher-Yates shuffle drawn from `rng`.
///
/// ```
/// use memory_match::core::{generate_board, GameConfig, GameRng};
///
/// let config = GameConfig::default();
/// let mut rng = GameRng::new(1);
/// let board = generate_board(2, &config, &mut rng).unwrap();
/// assert_eq!(board.len(), 8);
/// assert!(board.symbol_counts().values().all(|&n| n == 2));
/// ```
pub fn generate_board<R: IndexSource + ?Sized>(
    level: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Board, EngineError> {
    if level == 0 {
        return Err(EngineError::InvalidLevel { level });
    }
    let max_level = config.max_level();
    if level > max_level {
        return Err(EngineError::LevelUnsupported { level, max_level });
    }

    let pairs = config.pair_count(level);
    let symbols = config
        .symbols
        .take(pairs)
        .ok_or(EngineError::LevelUnsupported { level, max_level })?;

    let mut cells: Vec<SymbolId> = symbols.flat_map(|s| [s, s]).collect();
    fisher_yates(&mut cells, rng);

    Ok(Board {
        cells: Vector::from(cells),
    })
}
