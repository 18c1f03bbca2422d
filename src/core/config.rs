//! Game configuration.
//!
//! `GameConfig` carries every tunable the engine reads: the symbol
//! catalog, how board size grows with level, the mismatch delay and the
//! score increments. It deserializes from JSON with per-field defaults, so
//! a config file only needs the values it overrides.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::symbol::SymbolSet;

/// Pairs on a level-1 board.
pub const DEFAULT_BASE_PAIRS: usize = 3;

/// Pairs added per level.
pub const DEFAULT_PAIRS_PER_LEVEL: usize = 1;

/// How long a mismatched pair stays face-up.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use memory_match::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7).with_mismatch_delay_ms(500);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pair_count(1), 3);
/// assert_eq!(config.card_count(4), 12);
/// assert_eq!(config.max_level(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ordered catalog of face values.
    pub symbols: SymbolSet,

    /// Pairs on a level-1 board.
    pub base_pairs: usize,

    /// Pairs added for each level above 1.
    pub pairs_per_level: usize,

    /// Delay before a mismatched pair is turned back down.
    pub mismatch_delay_ms: u64,

    /// Score awarded per matched pair.
    pub match_points: u64,

    /// Score awarded on clearing a board.
    pub level_bonus: u64,

    /// Optional cap below the catalog-derived maximum level.
    pub max_level: Option<u32>,

    /// Seed for the default RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolSet::default(),
            base_pairs: DEFAULT_BASE_PAIRS,
            pairs_per_level: DEFAULT_PAIRS_PER_LEVEL,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            match_points: 1,
            level_bonus: 1,
            max_level: None,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a config with a custom symbol catalog.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Create a config with custom board growth.
    pub fn with_pairs(mut self, base_pairs: usize, pairs_per_level: usize) -> Self {
        self.base_pairs = base_pairs;
        self.pairs_per_level = pairs_per_level;
        self
    }

    /// Create a config with a custom mismatch delay.
    pub fn with_mismatch_delay_ms(mut self, delay_ms: u64) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    /// Create a config with custom score increments.
    pub fn with_scoring(mut self, match_points: u64, level_bonus: u64) -> Self {
        self.match_points = match_points;
        self.level_bonus = level_bonus;
        self
    }

    /// Create a config with a level cap.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Create a config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.base_pairs == 0 {
            return Err(ConfigError::ZeroBasePairs);
        }
        if self.pairs_per_level == 0 {
            return Err(ConfigError::ZeroPairsPerLevel);
        }
        if self.symbols.len() < self.base_pairs {
            return Err(ConfigError::CatalogTooSmall {
                symbols: self.symbols.len(),
                required: self.base_pairs,
            });
        }
        if let Some(requested) = self.max_level {
            let supported = self.catalog_max_level();
            if requested == 0 || requested > supported {
                return Err(ConfigError::MaxLevelOutOfRange { requested, supported });
            }
        }
        Ok(())
    }

    /// Pairs on a board at `level`.
    #[must_use]
    pub fn pair_count(&self, level: u32) -> usize {
        let extra = level.saturating_sub(1) as usize;
        self.base_pairs + extra * self.pairs_per_level
    }

    /// Cards on a board at `level`. Always even.
    #[must_use]
    pub fn card_count(&self, level: u32) -> usize {
        2 * self.pair_count(level)
    }

    /// Highest level whose board the catalog can fill.
    ///
    /// Only meaningful for a validated config.
    #[must_use]
    pub fn catalog_max_level(&self) -> u32 {
        if self.pairs_per_level == 0 || self.symbols.len() < self.base_pairs {
            return 1;
        }
        let extra = (self.symbols.len() - self.base_pairs) / self.pairs_per_level;
        u32::try_from(extra).map_or(u32::MAX, |e| e.saturating_add(1))
    }

    /// Highest level the engine will generate.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        let catalog = self.catalog_max_level();
        self.max_level.map_or(catalog, |cap| cap.min(catalog))
    }
}
