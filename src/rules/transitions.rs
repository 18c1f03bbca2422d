//! Pure state transitions.
//!
//! Each function takes the current state by reference and returns the next
//! one. Nothing here knows about time: a `Mismatched` outcome leaves two
//! cards selected and it is the caller's job to call `clear_selection`
//! once the mismatch delay has passed.

use log::{debug, trace, warn};

use crate::core::{
    generate_board, EngineError, GameConfig, GameState, IgnoreReason, IndexSource, TapOutcome,
};

/// Next state plus what the tap did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: TapOutcome,
}

/// Apply a tap on card `index`.
///
/// `rng` is only consulted when the tap clears the board and a new level
/// is dealt. Out-of-range indices are rejected and `state` is untouched.
pub fn tap_card<R: IndexSource + ?Sized>(
    state: &GameState,
    index: usize,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Transition, EngineError> {
    let card_count = state.card_count();
    let Some(symbol) = state.board.get(index) else {
        warn!("rejected tap on card {} (board has {} cards)", index, card_count);
        return Err(EngineError::IndexOutOfRange { index, card_count });
    };

    let ignore = if state.is_matched(index) {
        Some(IgnoreReason::AlreadyMatched)
    } else if state.is_selected(index) {
        Some(IgnoreReason::AlreadySelected)
    } else if state.selection.len() >= 2 {
        Some(IgnoreReason::ResolutionPending)
    } else {
        None
    };
    if let Some(reason) = ignore {
        trace!("ignored tap on card {}: {:?}", index, reason);
        return Ok(Transition {
            state: state.clone(),
            outcome: TapOutcome::Ignored(reason),
        });
    }

    let mut next = state.clone();

    let Some(&first) = state.selection.first() else {
        next.selection.push(index);
        next.revealed.insert(index);
        return Ok(Transition {
            state: next,
            outcome: TapOutcome::Revealed { index },
        });
    };

    if state.board.get(first) != Some(symbol) {
        debug!("mismatch: cards {} and {}", first, index);
        next.selection.push(index);
        next.revealed.insert(index);
        return Ok(Transition {
            state: next,
            outcome: TapOutcome::Mismatched { first, second: index },
        });
    }

    debug!("match: cards {} and {} ({})", first, index, symbol);
    next.matched.insert(first);
    next.matched.insert(index);
    next.selection.clear();
    next.score = next.score.saturating_add(config.match_points);

    if did_player_win(&next) {
        let advanced = advance_level(&next, config, rng)?;
        let level = advanced.level;
        return Ok(Transition {
            state: advanced,
            outcome: TapOutcome::LevelAdvanced { first, second: index, level },
        });
    }

    Ok(Transition {
        state: next,
        outcome: TapOutcome::Matched { first, second: index },
    })
}

/// Turn a pending mismatch back face-down.
///
/// Only the selection changes; matched cards, revealed history and score
/// are left alone.
#[must_use]
pub fn clear_selection(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.selection.clear();
    next
}

/// All cards on the board are matched.
#[must_use]
pub fn did_player_win(state: &GameState) -> bool {
    state.is_won()
}

/// Deal the next level.
///
/// Awards the level bonus and replaces the board. At the highest level the
/// catalog supports, the level stays put and a fresh board of the same
/// size is dealt.
pub fn advance_level<R: IndexSource + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    let max_level = config.max_level();
    let level = state.level.saturating_add(1).min(max_level);
    let board = generate_board(level, config, rng)?;

    if level == state.level {
        debug!("level {} is the highest level, dealing a fresh board", level);
    } else {
        debug!("advancing to level {} ({} cards)", level, board.len());
    }

    Ok(GameState::new(level, state.score.saturating_add(config.level_bonus), board))
}

/// The canonical starting state: level 1, score 0, fresh board.
pub fn reset_game<R: IndexSource + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    let board = generate_board(1, config, rng)?;
    Ok(GameState::with_board(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameRng, SymbolId};

    const A: SymbolId = SymbolId::new(0);
    const B: SymbolId = SymbolId::new(1);

    fn abab() -> GameState {
        GameState::with_board(Board::from_cells([A, B, A, B]).unwrap())
    }

    fn tap(state: &GameState, index: usize) -> Transition {
        let config = GameConfig::default();
        let mut rng = GameRng::new(0);
        tap_card(state, index, &config, &mut rng).unwrap()
    }

    #[test]
    fn test_first_tap_reveals() {
        let t = tap(&abab(), 0);

        assert_eq!(t.outcome, TapOutcome::Revealed { index: 0 });
        assert_eq!(t.state.selection(), &[0]);
        assert!(t.state.was_revealed(0));
        assert_eq!(t.state.score(), 0);
    }

    #[test]
    fn test_matching_pair() {
        let t = tap(&tap(&abab(), 0).state, 2);

        assert_eq!(t.outcome, TapOutcome::Matched { first: 0, second: 2 });
        assert!(t.state.selection().is_empty());
        assert_eq!(t.state.matched().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(t.state.score(), 1);
        // Only the first pick is recorded as turned over.
        assert!(t.state.was_revealed(0));
        assert!(!t.state.was_revealed(2));
    }

    #[test]
    fn test_mismatching_pair() {
        let t = tap(&tap(&abab(), 0).state, 1);

        assert_eq!(t.outcome, TapOutcome::Mismatched { first: 0, second: 1 });
        assert_eq!(t.state.selection(), &[0, 1]);
        assert!(t.state.matched().is_empty());
        assert_eq!(t.state.score(), 0);
        assert!(t.state.was_revealed(1));

        let cleared = clear_selection(&t.state);
        assert!(cleared.selection().is_empty());
        assert_eq!(cleared.revealed(), t.state.revealed());
        assert_eq!(cleared.score(), 0);
    }

    #[test]
    fn test_ignored_taps_leave_state_alone() {
        let one = tap(&abab(), 0).state;
        let t = tap(&one, 0);
        assert_eq!(t.outcome, TapOutcome::Ignored(IgnoreReason::AlreadySelected));
        assert_eq!(t.state, one);

        let pending = tap(&one, 1).state;
        let t = tap(&pending, 2);
        assert_eq!(t.outcome, TapOutcome::Ignored(IgnoreReason::ResolutionPending));
        assert_eq!(t.state, pending);

        let matched = tap(&tap(&abab(), 0).state, 2).state;
        let t = tap(&matched, 2);
        assert_eq!(t.outcome, TapOutcome::Ignored(IgnoreReason::AlreadyMatched));
        assert_eq!(t.state, matched);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(0);
        let state = abab();
        assert_eq!(
            tap_card(&state, 4, &config, &mut rng),
            Err(EngineError::IndexOutOfRange { index: 4, card_count: 4 })
        );
    }

    #[test]
    fn test_final_pair_advances_level() {
        let mut state = abab();
        for index in [0, 2, 1] {
            state = tap(&state, index).state;
        }
        let t = tap(&state, 3);

        assert_eq!(t.outcome, TapOutcome::LevelAdvanced { first: 1, second: 3, level: 2 });
        assert_eq!(t.state.level(), 2);
        // One per pair plus the level bonus.
        assert_eq!(t.state.score(), 3);
        assert_eq!(t.state.card_count(), 8);
        assert!(t.state.selection().is_empty());
        assert!(t.state.matched().is_empty());
        assert!(t.state.revealed().is_empty());
    }

    #[test]
    fn test_advance_level_saturates() {
        let config = GameConfig::default().with_max_level(2);
        let mut rng = GameRng::new(5);
        let state = GameState::new(2, 10, generate_board(2, &config, &mut rng).unwrap());

        let next = advance_level(&state, &config, &mut rng).unwrap();
        assert_eq!(next.level(), 2);
        assert_eq!(next.score(), 11);
        assert_eq!(next.card_count(), 8);
    }

    #[test]
    fn test_custom_scoring() {
        let config = GameConfig::default().with_scoring(5, 100);
        let mut rng = GameRng::new(0);

        let mut state = abab();
        for index in [0, 2, 1, 3] {
            state = tap_card(&state, index, &config, &mut rng).unwrap().state;
        }
        assert_eq!(state.score(), 5 + 5 + 100);
    }

    #[test]
    fn test_score_saturates() {
        let config = GameConfig::default().with_scoring(u64::MAX, u64::MAX);
        let mut rng = GameRng::new(0);

        let mut state = abab();
        for index in [0, 2, 1, 3] {
            state = tap_card(&state, index, &config, &mut rng).unwrap().state;
        }
        assert_eq!(state.level(), 2);
        assert_eq!(state.score(), u64::MAX);
    }

    #[test]
    fn test_reset_game() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(9);
        let state = reset_game(&config, &mut rng).unwrap();

        assert_eq!(state.level(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.card_count(), 6);
        assert!(!did_player_win(&state));
    }
}
