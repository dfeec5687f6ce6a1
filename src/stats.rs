//! Shared search statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Attempt counter and start time shared by all workers and the status
/// printer.
///
/// Incremented by every worker, read concurrently for the status line; an
/// explicit context object handed out at construction rather than a global.
#[derive(Debug)]
pub struct SearchStats {
    attempts: AtomicU64,
    started: Instant,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            attempts: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Records one generated-and-checked keypair.
    #[inline]
    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the total number of attempts so far.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the time elapsed since the search started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns the average attempt rate in addresses per second.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.attempts() as f64 / secs
        } else {
            0.0
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}
