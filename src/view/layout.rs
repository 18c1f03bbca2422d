//! Card sizing hint.
//!
//! Cards shrink linearly as the board grows, between a third of the
//! viewport width and a fixed minimum. The engine never calls this; it is
//! offered to renderers that lay cards out in a wrapping row.

/// Smallest card edge, in viewport units.
pub const MIN_CARD_SIZE: f32 = 55.0;

/// How far above the base size a card may grow.
pub const CARD_SIZE_HEADROOM: f32 = 10.0;

/// Board size at which cards reach the minimum.
pub const REFERENCE_MAX_CARDS: usize = 16;

/// Drawable area owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Edge length for each card on a board of `total_cards`.
///
/// ```
/// use memory_match::view::{card_size, Viewport, MIN_CARD_SIZE};
///
/// let vp = Viewport::new(390.0, 844.0);
/// assert_eq!(card_size(1, 16, vp), 130.0);
/// assert!(card_size(6, 16, vp) < 130.0);
/// assert_eq!(card_size(16, 16, vp), MIN_CARD_SIZE);
/// ```
#[must_use]
pub fn card_size(total_cards: usize, max_total_cards: usize, viewport: Viewport) -> f32 {
    let base = viewport.width / 3.0;
    let max = base + CARD_SIZE_HEADROOM;

    let calculated = if max_total_cards > 1 {
        let decrement = (base - MIN_CARD_SIZE) / (max_total_cards - 1) as f32;
        base - total_cards.saturating_sub(1) as f32 * decrement
    } else {
        base
    };

    calculated.min(max).max(MIN_CARD_SIZE)
}
