//! The game engine: sole owner and writer of `GameState`.

use log::{debug, info, trace};

use super::timer::{ClearScheduler, ClearTicket};
use crate::core::{
    generate_board, Board, EngineError, GameConfig, GameRng, GameRngState, GameState, IndexSource,
    TapOutcome,
};
use crate::rules;
use crate::view::{GameSnapshot, Renderer};

/// Owns the game state, the RNG and the mismatch-clear scheduler.
///
/// All mutation goes through `&mut self`, so taps and timer fires are
/// serialized by the borrow checker. Time reaches the engine either as
/// elapsed milliseconds (`advance_time`, for a game loop) or as a ticket
/// redeemed by an external timer (`fire_clear`).
///
/// ## Example
///
/// ```
/// use memory_match::core::GameConfig;
/// use memory_match::engine::GameEngine;
///
/// let mut engine = GameEngine::new(GameConfig::default().with_seed(1)).unwrap();
/// assert_eq!(engine.state().level(), 1);
/// assert_eq!(engine.state().card_count(), 6);
///
/// engine.tap_card(0).unwrap();
/// assert_eq!(engine.state().selection(), &[0]);
///
/// assert!(engine.tap_card(6).is_err());
/// ```
#[derive(Debug)]
pub struct GameEngine<R: IndexSource = GameRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    clear: ClearScheduler,
    revision: u64,
}

impl GameEngine<GameRng> {
    /// Create an engine seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// RNG state, for reproducing the boards dealt from here on.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: IndexSource> GameEngine<R> {
    /// Create an engine with a caller-supplied randomness source.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let state = rules::reset_game(&config, &mut rng)?;
        info!(
            "new game: {} symbols, max level {}, {}ms mismatch delay",
            config.symbols.len(),
            config.max_level(),
            config.mismatch_delay_ms
        );
        Ok(Self {
            config,
            rng,
            state,
            clear: ClearScheduler::new(),
            revision: 0,
        })
    }

    /// Create an engine resuming from an existing state.
    ///
    /// The state must be one play could reach under `config` (see
    /// `GameState::validate`). A state with a pending mismatch gets a fresh
    /// full-length clear.
    pub fn from_state(config: GameConfig, rng: R, state: GameState) -> Result<Self, EngineError> {
        config.validate()?;
        state.validate(&config)?;
        let mut engine = Self {
            config,
            rng,
            state,
            clear: ClearScheduler::new(),
            revision: 0,
        };
        if engine.state.is_mismatch_pending() {
            engine.clear.schedule(engine.config.mismatch_delay_ms);
        }
        Ok(engine)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Read-only copy for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, &self.config.symbols, self.revision)
    }

    /// Hand a fresh snapshot to `renderer`.
    pub fn render<V: Renderer + ?Sized>(&self, renderer: &mut V) {
        renderer.render(&self.snapshot());
    }

    /// Deal a board for `level` without touching the engine state.
    pub fn generate_board(&mut self, level: u32) -> Result<Board, EngineError> {
        generate_board(level, &self.config, &mut self.rng)
    }

    /// Handle a tap on card `index`.
    ///
    /// A mismatch schedules the selection clear; a level advance cancels
    /// any clear left over from the previous board. On error nothing
    /// changes.
    pub fn tap_card(&mut self, index: usize) -> Result<TapOutcome, EngineError> {
        let transition = rules::tap_card(&self.state, index, &self.config, &mut self.rng)?;
        let outcome = transition.outcome;
        if outcome.is_ignored() {
            return Ok(outcome);
        }

        self.commit(transition.state);
        if outcome.needs_clear() {
            let ticket = self.clear.schedule(self.config.mismatch_delay_ms);
            trace!("scheduled clear {:?} in {}ms", ticket, self.config.mismatch_delay_ms);
        } else if let TapOutcome::LevelAdvanced { level, .. } = outcome {
            self.clear.cancel();
            info!("level {} reached, score {}", level, self.state.score());
        }
        Ok(outcome)
    }

    /// All cards on the board are matched.
    ///
    /// Taps that clear the board advance the level immediately, so this is
    /// only observable on a state loaded through `from_state`.
    #[must_use]
    pub fn did_player_win(&self) -> bool {
        rules::did_player_win(&self.state)
    }

    /// Deal the next level and cancel any pending clear.
    pub fn advance_level(&mut self) -> Result<(), EngineError> {
        let next = rules::advance_level(&self.state, &self.config, &mut self.rng)?;
        self.clear.cancel();
        self.commit(next);
        Ok(())
    }

    /// Restart from level 1 with score 0 and cancel any pending clear.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let fresh = rules::reset_game(&self.config, &mut self.rng)?;
        if self.clear.cancel() {
            debug!("reset cancelled a pending clear");
        }
        self.commit(fresh);
        info!("game reset");
        Ok(())
    }

    /// Advance the engine clock.
    ///
    /// Returns true if a pending mismatch clear fired.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> bool {
        match self.clear.advance(elapsed_ms) {
            Some(ticket) => {
                self.apply_clear(ticket);
                true
            }
            None => false,
        }
    }

    /// Fire a clear from an external timer.
    ///
    /// Stale tickets (superseded by a reset, level advance or newer
    /// mismatch) are ignored and return false.
    pub fn fire_clear(&mut self, ticket: ClearTicket) -> bool {
        if !self.clear.is_current(ticket) {
            trace!("stale clear {:?} ignored", ticket);
            return false;
        }
        if !self.clear.redeem(ticket) {
            trace!("clear {:?} already fired", ticket);
            return false;
        }
        self.apply_clear(ticket);
        true
    }

    /// Ticket of the pending clear, for callers running their own timer.
    #[must_use]
    pub fn pending_clear(&self) -> Option<ClearTicket> {
        self.clear.pending().map(|p| p.ticket)
    }

    /// Milliseconds until the pending clear fires.
    #[must_use]
    pub fn clear_remaining_ms(&self) -> Option<u64> {
        self.clear.remaining_ms()
    }

    /// Drop the pending clear without clearing the selection.
    ///
    /// Call before tearing down a front end that owns a real timer.
    pub fn cancel_pending(&mut self) -> bool {
        self.clear.cancel()
    }

    fn apply_clear(&mut self, ticket: ClearTicket) {
        debug!("clear {:?} fired, hiding {:?}", ticket, self.state.selection());
        let next = rules::clear_selection(&self.state);
        self.commit(next);
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.revision += 1;
    }
}
