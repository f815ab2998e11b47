//! Restartable one-shot debounce, modeled as a token state machine.
//!
//! ## Design
//!
//! The original idiom for this ("if a timer id is outstanding, remove the
//! source, then add a new timeout") couples debouncing to a live event
//! loop. Here the state machine owns only the *decision*: `trigger`
//! invalidates any pending cycle and hands out a fresh token, and `accept`
//! fires at most once, for the newest token only. The host arms a real
//! timer for `delay()` after each trigger and offers the token back when
//! it elapses; stale timers are rejected by token identity, so there is
//! nothing to abort and no clock to fake in tests.

use std::time::Duration;

/// Proof of a specific armed debounce cycle.
///
/// Tokens are cheap copies; only the one from the most recent `trigger`
/// on a still-armed `Debounce` will be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken {
    generation: u64,
}

/// A single-shot, restartable quiet-period timer.
///
/// At most one cycle is pending per instance: triggering again cancels the
/// previous cycle unconditionally.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
    armed: bool,
}

impl Debounce {
    /// Creates a disarmed debounce with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            armed: false,
        }
    }

    /// The configured quiet period the host should sleep for.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms a new cycle, cancelling any pending one.
    ///
    /// Every outstanding token becomes stale the moment this is called.
    pub fn trigger(&mut self) -> DebounceToken {
        self.generation += 1;
        self.armed = true;
        tracing::trace!(generation = self.generation, "debounce armed");
        DebounceToken {
            generation: self.generation,
        }
    }

    /// Disarms the pending cycle. No-op if nothing is pending.
    pub fn cancel(&mut self) {
        if self.armed {
            self.armed = false;
            tracing::trace!(generation = self.generation, "debounce cancelled");
        }
    }

    /// Offers a token back after its timer elapsed.
    ///
    /// Returns true exactly once per cycle: only for the newest token, only
    /// while still armed. Accepting disarms, so a second offer of the same
    /// token is rejected too.
    pub fn accept(&mut self, token: DebounceToken) -> bool {
        if self.armed && token.generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Returns true if a cycle is pending.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debounce() -> Debounce {
        Debounce::new(Duration::from_millis(500))
    }

    #[test]
    fn test_accept_fires_once() {
        let mut d = debounce();
        let token = d.trigger();
        assert!(d.is_armed());
        assert!(d.accept(token));
        assert!(!d.is_armed());
        assert!(!d.accept(token));
    }

    #[test]
    fn test_retrigger_invalidates_older_token() {
        let mut d = debounce();
        let first = d.trigger();
        let second = d.trigger();

        // The first timer may still fire in the host; its token is stale.
        assert!(!d.accept(first));
        assert!(d.accept(second));
    }

    #[test]
    fn test_cancel_rejects_pending_token() {
        let mut d = debounce();
        let token = d.trigger();
        d.cancel();
        assert!(!d.is_armed());
        assert!(!d.accept(token));
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut d = debounce();
        d.cancel();
        assert!(!d.is_armed());
        let token = d.trigger();
        assert!(d.accept(token));
    }

    #[test]
    fn test_rapid_burst_yields_single_accept() {
        let mut d = debounce();
        let tokens: Vec<_> = (0..10).map(|_| d.trigger()).collect();
        let accepted = tokens.iter().filter(|t| d.accept(**t)).count();
        assert_eq!(accepted, 1);
    }
}
