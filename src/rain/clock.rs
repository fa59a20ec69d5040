use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
pub const REFERENCE_EPOCH_UNIX_SECS: f64 = 978_307_200.0;

/// Continuously advancing animation timestamp, in seconds.
///
/// Only continuity matters to the animation; the epoch is arbitrary.
pub trait Clock {
    fn now(&self) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        let unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        unix - REFERENCE_EPOCH_UNIX_SECS
    }
}

/// Clock driven by hand, for tests and benchmarks.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/clock.rs"]
mod tests;
