//! Mismatch-clear timer tests.
//!
//! Verify that the deferred clear:
//! - Fires after the configured delay, through either time path
//! - Never fires against a board dealt after it was scheduled
//! - Cannot be redeemed twice

use memory_match::core::{Board, GameConfig, GameRng, GameState, SymbolId};
use memory_match::engine::GameEngine;

const A: SymbolId = SymbolId::new(0);
const B: SymbolId = SymbolId::new(1);
const C: SymbolId = SymbolId::new(2);

fn engine_with(config: GameConfig, cells: &[SymbolId]) -> GameEngine {
    let board = Board::from_cells(cells.iter().copied()).unwrap();
    GameEngine::from_state(config, GameRng::new(42), GameState::with_board(board)).unwrap()
}

fn mismatch(engine: &mut GameEngine) {
    engine.tap_card(0).unwrap();
    engine.tap_card(1).unwrap();
    assert_eq!(engine.state().selection().len(), 2);
}

/// Configured delay is honoured.
#[test]
fn test_custom_delay() {
    let mut engine = engine_with(GameConfig::default().with_mismatch_delay_ms(250), &[A, B, A, B]);
    mismatch(&mut engine);

    assert_eq!(engine.clear_remaining_ms(), Some(250));
    assert!(!engine.advance_time(249));
    assert!(engine.advance_time(1));
    assert!(engine.state().selection().is_empty());
}

/// Time spread over many small ticks adds up.
#[test]
fn test_many_small_ticks() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, A, B]);
    mismatch(&mut engine);

    let fired: usize = (0..100).map(|_| engine.advance_time(16)).filter(|&f| f).count();
    assert_eq!(fired, 1);
    assert!(engine.state().selection().is_empty());
}

/// External timers redeem tickets.
#[test]
fn test_external_timer_fires_ticket() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, A, B]);
    mismatch(&mut engine);

    let ticket = engine.pending_clear().expect("Mismatch schedules a clear");
    assert!(engine.fire_clear(ticket));
    assert!(engine.state().selection().is_empty());

    // Already consumed.
    assert!(!engine.fire_clear(ticket));
    assert!(!engine.advance_time(5000));
}

/// Reset cancels the pending clear on both time paths.
#[test]
fn test_reset_cancels_pending_clear() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, A, B]);
    mismatch(&mut engine);
    let ticket = engine.pending_clear().unwrap();

    engine.reset().unwrap();
    assert!(engine.pending_clear().is_none());

    // Start a new turn on the fresh board.
    engine.tap_card(0).unwrap();
    let rev = engine.revision();

    assert!(!engine.fire_clear(ticket));
    assert!(!engine.advance_time(5000));
    assert_eq!(engine.state().selection(), &[0]);
    assert_eq!(engine.revision(), rev);
}

/// Level advance cancels the pending clear.
#[test]
fn test_level_advance_cancels_pending_clear() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, A, B]);
    mismatch(&mut engine);
    let ticket = engine.pending_clear().unwrap();

    engine.advance_level().unwrap();
    engine.tap_card(0).unwrap();

    assert!(!engine.fire_clear(ticket));
    assert!(!engine.advance_time(1000));
    assert_eq!(engine.state().selection(), &[0]);
}

/// A ticket from an earlier mismatch cannot clear a later one early.
#[test]
fn test_old_ticket_does_not_clear_new_mismatch() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, C, A, B, C]);
    mismatch(&mut engine);
    let old = engine.pending_clear().unwrap();
    assert!(engine.fire_clear(old));

    engine.tap_card(2).unwrap();
    engine.tap_card(3).unwrap();
    let new = engine.pending_clear().unwrap();
    assert_ne!(old, new);

    assert!(!engine.fire_clear(old));
    assert_eq!(engine.state().selection(), &[2, 3]);
    assert!(engine.fire_clear(new));
    assert!(engine.state().selection().is_empty());
}

/// Cancelling leaves the cards face-up.
#[test]
fn test_cancel_pending_keeps_selection() {
    let mut engine = engine_with(GameConfig::default(), &[A, B, A, B]);
    mismatch(&mut engine);

    assert!(engine.cancel_pending());
    assert!(!engine.advance_time(5000));
    assert_eq!(engine.state().selection(), &[0, 1]);
}
