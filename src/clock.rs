//! Monotonic millisecond clock and the fixed-cadence frame governor.

use std::time::{Duration, Instant};

/// Milliseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Caps the loop at a fixed number of frames per second by sleeping out the
/// remainder of each frame.  A late frame is not made up for; the next one
/// simply starts late.
#[derive(Debug)]
pub struct FrameGovernor {
    frame: Duration,
    frame_start: Instant,
}

impl FrameGovernor {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frame: frame_duration(frames_per_second),
            frame_start: Instant::now(),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's slot is used up, then start the next.
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if let Some(rest) = remaining(self.frame, elapsed) {
            std::thread::sleep(rest);
        }
        self.frame_start = Instant::now();
    }
}

fn frame_duration(frames_per_second: u32) -> Duration {
    Duration::from_secs_f64(1.0 / frames_per_second.max(1) as f64)
}

fn remaining(frame: Duration, elapsed: Duration) -> Option<Duration> {
    frame.checked_sub(elapsed).filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hz_frame_is_about_16ms() {
        let d = frame_duration(60);
        assert!(d > Duration::from_millis(16) && d < Duration::from_millis(17));
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn late_frame_sleeps_nothing() {
        let frame = Duration::from_millis(16);
        assert_eq!(remaining(frame, Duration::from_millis(20)), None);
        assert_eq!(remaining(frame, frame), None);
        assert_eq!(
            remaining(frame, Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
