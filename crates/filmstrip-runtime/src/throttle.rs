#![forbid(unsafe_code)]

//! Leading-edge throttling for pointer moves.
//!
//! While a resize is in progress the pointer can report hundreds of moves per
//! second. [`MoveThrottle`] admits the first move immediately and then drops
//! everything that arrives before the interval has elapsed. Dropped moves are
//! not replayed; the next admitted move carries the latest position anyway.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use filmstrip_runtime::throttle::MoveThrottle;
//! use web_time::Instant;
//!
//! let mut throttle = MoveThrottle::new(Duration::from_millis(50));
//! let t0 = Instant::now();
//! assert!(throttle.admit(t0));
//! assert!(!throttle.admit(t0 + Duration::from_millis(10)));
//! assert!(throttle.admit(t0 + Duration::from_millis(50)));
//! ```
//!
//! # Invariants
//!
//! 1. Two admitted moves are never closer than `interval`.
//! 2. After [`reset`](MoveThrottle::reset), the next move is admitted.
//! 3. A clock that steps backwards never admits early.

use std::time::Duration;

use web_time::Instant;

/// Leading-edge throttle with no trailing call.
#[derive(Debug, Clone)]
pub struct MoveThrottle {
    interval: Duration,
    last_admitted: Option<Instant>,
    dropped: u64,
}

impl MoveThrottle {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_admitted: None,
            dropped: 0,
        }
    }

    /// Decide whether a move observed at `now` should be processed.
    pub fn admit(&mut self, now: Instant) -> bool {
        let open = match self.last_admitted {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.interval),
        };
        if open {
            self.last_admitted = Some(now);
        } else {
            self.dropped = self.dropped.saturating_add(1);
        }
        open
    }

    /// Forget the last admitted move so the next one passes.
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }

    /// Moves rejected since construction.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
}
