//! Search control: stop flag and time limit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Checked by the search at every node. The clock is only read every 2048
/// nodes; the stop flag is read every time.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    hard_limit: Option<Duration>,
}

impl SearchControl {
    /// Control with no time limit; only the external stop flag ends the search.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            hard_limit: None,
        }
    }

    /// Control that aborts once `hard` has elapsed; the clock starts now.
    pub fn new_timed(stopped: Arc<AtomicBool>, hard: Duration) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            hard_limit: Some(hard),
        }
    }

    /// Check whether the search should abort immediately.
    ///
    /// When the hard limit fires, the stop flag is set so later calls return
    /// without reading the clock again.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if nodes & 2047 != 0 {
            return false;
        }

        if let Some(hard) = self.hard_limit
            && self.elapsed() >= hard
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
