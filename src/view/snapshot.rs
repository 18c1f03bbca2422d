//! Read-only view of the game for renderers.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, SymbolSet};

/// Glyph shown for a face-down card.
pub const HIDDEN_GLYPH: &str = "?";

/// Observable state of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Face glyph, whether or not it is currently visible.
    pub face: String,
    /// Face-up as part of the current turn.
    pub is_revealed: bool,
    /// Part of a confirmed pair.
    pub is_matched: bool,
    /// Turned over at least once on this board.
    pub was_turned: bool,
}

impl CellView {
    /// Should the face be shown?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_revealed || self.is_matched
    }

    /// What to draw on the card.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.is_face_up() {
            &self.face
        } else {
            HIDDEN_GLYPH
        }
    }
}

/// Everything a renderer needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub level: u32,
    pub score: u64,
    pub board_size: usize,
    pub cells: Vec<CellView>,
    pub has_won: bool,
    /// Engine revision this snapshot was taken at.
    pub revision: u64,
}

impl GameSnapshot {
    /// Capture `state`, resolving symbols through `symbols`.
    #[must_use]
    pub fn capture(state: &GameState, symbols: &SymbolSet, revision: u64) -> Self {
        let cells = state
            .board()
            .iter()
            .enumerate()
            .map(|(index, symbol)| CellView {
                face: symbols.glyph(symbol).unwrap_or(HIDDEN_GLYPH).to_string(),
                is_revealed: state.is_selected(index),
                is_matched: state.is_matched(index),
                was_turned: state.was_revealed(index),
            })
            .collect();

        Self {
            level: state.level(),
            score: state.score(),
            board_size: state.card_count(),
            cells,
            has_won: state.is_won(),
            revision,
        }
    }

    /// Glyphs to draw, one per card.
    pub fn display_glyphs(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(CellView::display)
    }
}

/// Presentation layer collaborator.
///
/// Implementors draw snapshots and forward input back to the engine
/// through `GameEngine::tap_card` and `GameEngine::reset`.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, SymbolId};

    fn state() -> GameState {
        let a = SymbolId::new(0);
        let b = SymbolId::new(1);
        let mut state = GameState::with_board(Board::from_cells([a, b, a, b]).unwrap());
        state.matched.insert(0);
        state.matched.insert(2);
        state.selection.push(1);
        state.revealed.insert(0);
        state.revealed.insert(1);
        state.revealed.insert(3);
        state
    }

    #[test]
    fn test_capture() {
        let symbols = SymbolSet::new(["A", "B"]).unwrap();
        let snap = GameSnapshot::capture(&state(), &symbols, 7);

        assert_eq!(snap.level, 1);
        assert_eq!(snap.board_size, 4);
        assert_eq!(snap.revision, 7);
        assert!(!snap.has_won);
        assert_eq!(snap.display_glyphs().collect::<Vec<_>>(), vec!["A", "B", "A", "?"]);

        let last = &snap.cells[3];
        assert!(!last.is_face_up());
        assert!(last.was_turned);
        assert_eq!(last.face, "B");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let symbols = SymbolSet::new(["A", "B"]).unwrap();
        let snap = GameSnapshot::capture(&state(), &symbols, 0);
        let value = serde_json::to_value(&snap).unwrap();

        assert_eq!(value["board_size"], 4);
        assert_eq!(value["cells"][1]["is_revealed"], true);
        assert_eq!(value["cells"][0]["is_matched"], true);
    }
}
