//! Error types.
//!
//! Every error here is a caller contract violation. The engine rejects the
//! call and leaves its state untouched; there is nothing to retry.

use super::symbol::SymbolId;

/// Invalid `GameConfig` or `SymbolSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The symbol catalog has no entries.
    EmptyCatalog,
    /// The symbol catalog has more entries than `SymbolId` can address.
    CatalogTooLarge { symbols: usize },
    /// A glyph appears more than once in the catalog.
    DuplicateSymbol(String),
    /// `base_pairs` must be at least 1.
    ZeroBasePairs,
    /// `pairs_per_level` must be at least 1.
    ZeroPairsPerLevel,
    /// The catalog cannot fill even a level-1 board.
    CatalogTooSmall { symbols: usize, required: usize },
    /// An explicit `max_level` is 0 or beyond what the catalog supports.
    MaxLevelOutOfRange { requested: u32, supported: u32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyCatalog => write!(f, "symbol catalog is empty"),
            ConfigError::CatalogTooLarge { symbols } => {
                write!(f, "symbol catalog has {} entries, at most {} allowed", symbols, u16::MAX)
            }
            ConfigError::DuplicateSymbol(glyph) => {
                write!(f, "symbol {:?} appears more than once in the catalog", glyph)
            }
            ConfigError::ZeroBasePairs => write!(f, "base_pairs must be at least 1"),
            ConfigError::ZeroPairsPerLevel => write!(f, "pairs_per_level must be at least 1"),
            ConfigError::CatalogTooSmall { symbols, required } => write!(
                f,
                "symbol catalog has {} entries but level 1 needs {}",
                symbols, required
            ),
            ConfigError::MaxLevelOutOfRange { requested, supported } => write!(
                f,
                "max_level {} is out of range (catalog supports 1..={})",
                requested, supported
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rejected engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Tapped index is outside `[0, card_count)`.
    IndexOutOfRange { index: usize, card_count: usize },
    /// Levels start at 1.
    InvalidLevel { level: u32 },
    /// The catalog has too few symbols for this level.
    LevelUnsupported { level: u32, max_level: u32 },
    /// A hand-built board holds a symbol some number of times other than two.
    UnpairedSymbol { symbol: SymbolId, count: usize },
    /// A board holds a symbol the catalog has no glyph for.
    UnknownSymbol { symbol: SymbolId },
    /// A loaded selection has more than two cards, repeats a card, holds a
    /// matched card, or is a pair that should already have matched.
    InvalidSelection { selection: Vec<usize> },
    /// A matched card whose partner is not matched.
    UnpairedMatch { index: usize },
    /// The engine was constructed from an invalid configuration.
    Config(ConfigError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::IndexOutOfRange { index, card_count } => write!(
                f,
                "card index {} out of range for a board of {} cards",
                index, card_count
            ),
            EngineError::InvalidLevel { level } => write!(f, "level {} is invalid, levels start at 1", level),
            EngineError::LevelUnsupported { level, max_level } => write!(
                f,
                "level {} exceeds the highest supported level {}",
                level, max_level
            ),
            EngineError::UnpairedSymbol { symbol, count } => {
                write!(f, "{} appears {} times on the board, expected 2", symbol, count)
            }
            EngineError::UnknownSymbol { symbol } => {
                write!(f, "{} is not in the symbol catalog", symbol)
            }
            EngineError::InvalidSelection { selection } => {
                write!(f, "selection {:?} cannot occur during play", selection)
            }
            EngineError::UnpairedMatch { index } => {
                write!(f, "card {} is matched but its partner is not", index)
            }
            EngineError::Config(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}
