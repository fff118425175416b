//! Advisory client-side cool-down for user-triggered network actions.
//!
//! Not a security control: the backend enforces its own limits.

use std::time::Duration;
use tokio::time::Instant;

/// One-shot cool-down. `engage` while already limited replaces the pending
/// release, so only the last call decides when the limiter lifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimiter {
    until: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_limited(&self) -> bool {
        self.until.is_some_and(|until| Instant::now() < until)
    }

    pub fn engage(&mut self, duration: Duration) {
        self.until = Some(Instant::now() + duration);
    }

    /// Lifts the limiter immediately.
    pub fn release(&mut self) {
        self.until = None;
    }

    /// Time left until the limiter lifts, zero when not limited.
    pub fn remaining(&self) -> Duration {
        self.until
            .map(|until| until.saturating_duration_since(Instant::now()))
            .unwrap_or_default()
    }
}
