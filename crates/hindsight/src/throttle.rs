//! Leading-edge call throttle.

use std::time::Duration;

use tokio::time::Instant;

/// A leading-edge throttle with drop semantics.
///
/// The first acquisition passes immediately; acquisitions inside the
/// minimum interval are dropped, not queued. Intended for rate-limiting a
/// scroll-driven consumer's calls into a streamer; it never blocks or
/// delays the streamer's own operations.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hindsight::Throttle;
///
/// let mut throttle = Throttle::new(Duration::from_millis(200));
/// assert!(throttle.try_acquire());
/// assert!(!throttle.try_acquire());
/// ```
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum spacing between calls.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Returns `true` if a call may proceed now, recording the call time.
    /// Returns `false` (dropping the call) when inside the interval.
    pub fn try_acquire(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
