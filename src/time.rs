//! Frame pacing: rate limiting, rate measurement and per-frame delta.
//!
//! The three pieces are independent and are combined by the frame loop:
//!
//! ```ignore
//! use lorenz_trails::time::{FrameClock, FrameLimiter, RateCounter};
//!
//! let mut clock = FrameClock::new();
//! let mut limiter = FrameLimiter::new(60);
//! let mut rate = RateCounter::new();
//!
//! // Once per loop iteration:
//! let dt = clock.tick();
//! limiter.wait();
//! rate.record(dt);
//! println!("{} fps", rate.rate());
//! ```
//!
//! The delta from [`FrameClock`] only feeds the rate counter. The simulation
//! advances by a fixed sub-step regardless of how long a frame took.

use std::thread;
use std::time::{Duration, Instant};

/// Wall-clock delta between successive loop iterations.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    delta_secs: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Start measuring from now.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            delta_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Seconds since the previous call (or since creation). Not clamped: a
    /// stalled frame reports its full duration.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        self.frame_count += 1;
        self.delta_secs
    }

    /// Delta returned by the last [`FrameClock::tick`].
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta_secs
    }

    /// Number of ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Caps the loop rate by blocking until the frame interval has passed.
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    prev: Option<Instant>,
}

impl FrameLimiter {
    /// Limit to `fps` frames per second. The interval is `1000 / fps` whole
    /// milliseconds; `fps == 0` disables limiting.
    pub fn new(fps: u32) -> Self {
        let interval = match fps {
            0 => Duration::ZERO,
            fps => Duration::from_millis(1000 / fps as u64),
        };
        Self {
            interval,
            prev: None,
        }
    }

    /// Target time between accepted frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until at least one interval has elapsed since the previous
    /// return, then take the return instant as the new reference.
    ///
    /// The first call only records the reference and returns at once, where a
    /// limiter that seeds its reference on the same call would block for one
    /// interval before the first frame. Never returns early: the sleep is
    /// repeated for any residual left by a short wake-up.
    pub fn wait(&mut self) {
        let mut now = Instant::now();
        if let Some(prev) = self.prev {
            let deadline = prev + self.interval;
            while now < deadline {
                thread::sleep(deadline - now);
                now = Instant::now();
            }
        }
        self.prev = Some(now);
    }
}

/// Frames-per-second measurement over one-second windows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RateCounter {
    total: f64,
    count: u32,
    rate: u32,
}

impl RateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one frame that took `dt` seconds.
    ///
    /// Once the accumulated time exceeds one second, the frame count is
    /// published and one second is subtracted, so the surplus carries into
    /// the next window. Returns `true` when a new rate was published.
    pub fn record(&mut self, dt: f64) -> bool {
        self.total += dt;
        self.count += 1;
        if self.total > 1.0 {
            self.rate = self.count;
            self.total -= 1.0;
            self.count = 0;
            return true;
        }
        false
    }

    /// Last published rate. Zero until the first window completes.
    #[inline]
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Time accumulated towards the current window.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.total
    }

    /// Frames counted in the current window.
    #[inline]
    pub fn pending(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_tick() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();

        assert!(dt >= 0.010);
        assert_eq!(clock.delta(), dt);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_clock_does_not_clamp() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(120));
        assert!(clock.tick() >= 0.120);
    }

    #[test]
    fn test_limiter_interval() {
        assert_eq!(FrameLimiter::new(60).interval(), Duration::from_millis(16));
        assert_eq!(FrameLimiter::new(0).interval(), Duration::ZERO);
    }

    #[test]
    fn test_limiter_first_call_returns_immediately() {
        let mut limiter = FrameLimiter::new(1);
        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_limiter_never_returns_early() {
        let mut limiter = FrameLimiter::new(60);
        limiter.wait();
        let start = Instant::now();

        // Simulated work shorter than the frame interval
        thread::sleep(Duration::from_millis(5));
        limiter.wait();

        assert!(start.elapsed() >= Duration::from_millis(16));
    }

    #[test]
    fn test_limiter_does_not_sleep_after_slow_frame() {
        let mut limiter = FrameLimiter::new(60);
        limiter.wait();
        thread::sleep(Duration::from_millis(30));

        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() < Duration::from_millis(16));
    }

    #[test]
    fn test_rate_publishes_and_carries_residual() {
        let mut rate = RateCounter::new();

        // 59 frames at 1/60 s stay under the one-second threshold
        for _ in 0..59 {
            assert!(!rate.record(1.0 / 60.0));
        }
        assert_eq!(rate.rate(), 0);

        // The 60th frame brings the total to exactly 1.2 s
        assert!(rate.record(1.2 - 59.0 / 60.0));
        assert_eq!(rate.rate(), 60);
        assert_eq!(rate.pending(), 0);
        assert!((rate.residual() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_rate_threshold_is_strict() {
        let mut rate = RateCounter::new();
        assert!(!rate.record(0.5));
        assert!(!rate.record(0.5));
        assert_eq!(rate.rate(), 0);
        assert!(rate.record(0.25));
        assert_eq!(rate.rate(), 3);
        assert!((rate.residual() - 0.25).abs() < 1e-12);
    }
}
