//! Face values shown on cards.
//!
//! The engine never compares glyph strings during play. A board holds
//! `SymbolId`s, which index into an ordered `SymbolSet` catalog; the
//! catalog resolves them back to glyphs when a snapshot is taken.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Glyphs used by the default catalog, in board-filling order.
pub const DEFAULT_GLYPHS: [&str; 11] = [
    "👹", "🙀", "👽", "🌻", "👻", "🐶", "🦄", "🧉", "🥐", "🌈", "⚡️",
];

/// Index of a face value within a `SymbolSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the catalog position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Ordered catalog of distinct face values.
///
/// Boards take symbols from the front of the catalog, so ordering
/// decides which glyphs appear on small boards.
///
/// ## Example
///
/// ```
/// use memory_match::core::{SymbolId, SymbolSet};
///
/// let set = SymbolSet::new(["A", "B", "C"]).unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.glyph(SymbolId::new(1)), Some("B"));
///
/// assert!(SymbolSet::new(["A", "A"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolSet {
    glyphs: Vec<String>,
}

impl SymbolSet {
    /// Build a catalog, rejecting empty input and duplicate glyphs.
    pub fn new<I, S>(glyphs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        if glyphs.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if glyphs.len() > usize::from(u16::MAX) {
            return Err(ConfigError::CatalogTooLarge { symbols: glyphs.len() });
        }

        let mut seen = FxHashSet::default();
        for glyph in &glyphs {
            if !seen.insert(glyph.as_str()) {
                return Err(ConfigError::DuplicateSymbol(glyph.clone()));
            }
        }

        Ok(Self { glyphs })
    }

    /// Number of symbols in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Resolve a symbol to its glyph.
    #[must_use]
    pub fn glyph(&self, id: SymbolId) -> Option<&str> {
        self.glyphs.get(id.index()).map(String::as_str)
    }

    /// The first `count` symbol IDs, or `None` if the catalog is too short.
    #[must_use]
    pub fn take(&self, count: usize) -> Option<impl Iterator<Item = SymbolId>> {
        if count > self.glyphs.len() {
            return None;
        }
        Some((0..count).map(|i| SymbolId::new(i as u16)))
    }

    /// Iterate over glyphs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(String::as_str)
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.iter().map(|g| (*g).to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for SymbolSet {
    type Error = ConfigError;

    fn try_from(glyphs: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(glyphs)
    }
}

impl From<SymbolSet> for Vec<String> {
    fn from(set: SymbolSet) -> Self {
        set.glyphs
    }
}
