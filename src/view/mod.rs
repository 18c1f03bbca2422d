//! Renderer boundary.
//!
//! The engine exposes a read-only `GameSnapshot`; renderers implement
//! `Renderer` and own all geometry. `card_size` is a layout helper for
//! renderers and is not consulted by the engine.

mod layout;
mod snapshot;

pub use layout::{card_size, Viewport, CARD_SIZE_HEADROOM, MIN_CARD_SIZE, REFERENCE_MAX_CARDS};
pub use snapshot::{CellView, GameSnapshot, Renderer, HIDDEN_GLYPH};
