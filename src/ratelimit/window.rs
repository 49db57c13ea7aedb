//! Sliding-window request gate.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::trace;

/// Default number of requests admitted per trailing window.
pub const DEFAULT_MAX_REQUESTS: usize = 5;
/// Default trailing window length.
pub const DEFAULT_TIME_WINDOW: Duration = Duration::from_millis(30_000);

/// A sliding-window log rate limiter.
///
/// Tracks the instant of every admitted request and admits a new attempt only
/// while fewer than `max_requests` admissions remain inside the trailing
/// window. Expired timestamps are pruned on every admission check, so the
/// window is exact and needs no background expiry.
///
/// The timestamp log is guarded by a mutex, which keeps the prune+append step
/// atomic under concurrent callers.
pub struct SlidingWindow {
    /// Maximum admissions inside the trailing window
    max_requests: usize,
    /// Trailing window length
    window: Duration,
    /// Instants of admitted requests still inside the window, oldest first
    admitted: Mutex<VecDeque<Instant>>,
}

impl SlidingWindow {
    /// Create a new sliding window with the given limit and window length.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            admitted: Mutex::new(VecDeque::new()),
        }
    }

    /// Check whether a request observed at `now` may proceed.
    ///
    /// Prunes every retained timestamp whose age has reached the window, then
    /// admits and records `now` if fewer than `max_requests` admissions
    /// remain. A rejected attempt is not recorded and does not extend the
    /// window.
    pub fn try_admit(&self, now: Instant) -> bool {
        let mut admitted = self.admitted.lock();
        Self::prune(&mut admitted, now, self.window);

        if admitted.len() < self.max_requests {
            admitted.push_back(now);
            true
        } else {
            trace!(
                retained = admitted.len(),
                window_ms = self.window.as_millis() as u64,
                "Admission rejected"
            );
            false
        }
    }

    /// Number of admissions still inside the window at `now`.
    pub fn active_count(&self, now: Instant) -> usize {
        let mut admitted = self.admitted.lock();
        Self::prune(&mut admitted, now, self.window);
        admitted.len()
    }

    /// Admissions left before the limit is reached at `now`.
    pub fn remaining(&self, now: Instant) -> usize {
        self.max_requests.saturating_sub(self.active_count(now))
    }

    /// The admission limit for this window.
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// The trailing window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Drop timestamps whose age relative to `now` has reached the window.
    ///
    /// An age exactly equal to the window counts as expired: only strictly
    /// younger entries are retained.
    fn prune(admitted: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(&oldest) = admitted.front() {
            if now.saturating_duration_since(oldest) >= window {
                admitted.pop_front();
            } else {
                break;
            }
        }
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_TIME_WINDOW)
    }
}
