//! Cancellable deferred selection clear.
//!
//! A mismatch leaves two cards face-up for a fixed delay. The clear is
//! modelled as a single pending task tagged with a generation number:
//!
//! - `schedule` bumps the generation and replaces any pending task
//! - `cancel` bumps the generation and drops the pending task
//! - a `ClearTicket` only fires if its generation is still current
//!
//! A ticket held by an external timer therefore becomes inert as soon as
//! the board it was issued for is replaced.

use serde::{Deserialize, Serialize};

/// Handle for one scheduled clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearTicket {
    generation: u64,
}

impl ClearTicket {
    /// Generation this ticket was issued for.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// A clear waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingClear {
    pub ticket: ClearTicket,
    /// Scheduler clock value at which the clear is due.
    pub due_at_ms: u64,
}

/// Single-slot scheduler with its own millisecond clock.
///
/// The clock only moves through `advance`, so the scheduler can be driven
/// by a game loop, a test, or a real timer alike.
#[derive(Clone, Debug, Default)]
pub struct ClearScheduler {
    generation: u64,
    now_ms: u64,
    pending: Option<PendingClear>,
}

impl ClearScheduler {
    /// Create an idle scheduler at time 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a clear `delay_ms` from now, superseding any pending one.
    pub fn schedule(&mut self, delay_ms: u64) -> ClearTicket {
        self.generation += 1;
        let ticket = ClearTicket {
            generation: self.generation,
        };
        self.pending = Some(PendingClear {
            ticket,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
        });
        ticket
    }

    /// Drop the pending clear. Outstanding tickets become stale.
    ///
    /// Returns true if a clear was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.pending.take().is_some()
    }

    /// Advance the clock by `elapsed_ms`.
    ///
    /// Returns the ticket of the pending clear if it is now due, removing
    /// it from the scheduler.
    pub fn advance(&mut self, elapsed_ms: u64) -> Option<ClearTicket> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        match self.pending {
            Some(p) if p.due_at_ms <= self.now_ms => {
                self.pending = None;
                Some(p.ticket)
            }
            _ => None,
        }
    }

    /// Consume `ticket` if it is the pending one.
    ///
    /// Returns false for stale or already-consumed tickets.
    pub fn redeem(&mut self, ticket: ClearTicket) -> bool {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Is `ticket` from the current generation?
    #[must_use]
    pub fn is_current(&self, ticket: ClearTicket) -> bool {
        ticket.generation == self.generation
    }

    /// The pending clear, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingClear> {
        self.pending.as_ref()
    }

    /// Milliseconds until the pending clear is due.
    #[must_use]
    pub fn remaining_ms(&self) -> Option<u64> {
        self.pending.map(|p| p.due_at_ms.saturating_sub(self.now_ms))
    }

    /// Scheduler clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut sched = ClearScheduler::new();
        let ticket = sched.schedule(1000);

        assert_eq!(sched.advance(999), None);
        assert_eq!(sched.remaining_ms(), Some(1));
        assert_eq!(sched.advance(1), Some(ticket));
        assert!(sched.pending().is_none());
        assert_eq!(sched.advance(5000), None);
    }

    #[test]
    fn test_cancel_makes_ticket_stale() {
        let mut sched = ClearScheduler::new();
        let ticket = sched.schedule(1000);

        assert!(sched.cancel());
        assert!(!sched.is_current(ticket));
        assert!(!sched.redeem(ticket));
        assert_eq!(sched.advance(2000), None);
        assert!(!sched.cancel());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut sched = ClearScheduler::new();
        let old = sched.schedule(1000);
        sched.advance(600);
        let new = sched.schedule(1000);

        assert_ne!(old, new);
        assert!(!sched.redeem(old));
        assert_eq!(sched.advance(500), None);
        assert_eq!(sched.advance(500), Some(new));
    }

    #[test]
    fn test_redeem_once() {
        let mut sched = ClearScheduler::new();
        let ticket = sched.schedule(1000);

        assert!(sched.redeem(ticket));
        assert!(!sched.redeem(ticket));
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut sched = ClearScheduler::new();
        let ticket = sched.schedule(0);
        assert_eq!(sched.advance(0), Some(ticket));
    }
}
