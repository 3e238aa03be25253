use std::time::{Duration, Instant};

/// Measures how long the engine has been idle, for the next tick's input.
#[derive(Debug, Clone, Default)]
pub struct IdleClock {
    since: Option<Instant>,
}

impl IdleClock {
    pub fn new() -> IdleClock {
        IdleClock { since: None }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or(Duration::ZERO)
    }

    /// Starts the clock on the first idle tick and clears it on any busy one.
    pub fn record(&mut self, idle: bool, now: Instant) {
        if idle {
            self.since.get_or_insert(now);
        } else {
            self.since = None;
        }
    }
}
