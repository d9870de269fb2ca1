//! Token-keyed rate limiting.
//!
//! Coalescing is keyed by a caller-supplied token on a monotonic clock, so
//! two call sites asking for the same token share one cooldown and a "new"
//! closure never dodges the limiter.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cooldown table: an action keyed by `token` runs at most once per interval.
/// The first call in a quiet period runs; calls inside the cooldown are
/// dropped, not deferred.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_run: HashMap<&'static str, Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: HashMap::new(),
        }
    }

    /// Whether an action keyed by `token` may run now.
    pub fn allow(&mut self, token: &'static str) -> bool {
        self.allow_at(token, Instant::now())
    }

    /// Clock-injected variant for tests.
    pub fn allow_at(&mut self, token: &'static str, now: Instant) -> bool {
        if let Some(last) = self.last_run.get(token) {
            if now.duration_since(*last) < self.interval {
                return false;
            }
        }
        self.last_run.insert(token, now);
        true
    }
}
