//! Timestamps used for time priority.
//!
//! A [`Clock`] must never go backwards between calls. [`SystemClock`] reads wall-clock
//! nanoseconds and clamps them to the last value handed out; [`LogicalClock`] is a
//! plain counter for deterministic tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock: Send {
    /// Current timestamp. Nondecreasing across calls on the same clock.
    fn now(&self) -> u64;
}

/// Wall-clock nanoseconds since the Unix epoch, made monotonic.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let prev = self.last.fetch_max(wall, Ordering::Relaxed);
        prev.max(wall)
    }
}

/// Counter clock: 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct LogicalClock {
    ticks: AtomicU64,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting after `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            ticks: AtomicU64::new(start),
        }
    }
}

impl Clock for LogicalClock {
    fn now(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }
}
