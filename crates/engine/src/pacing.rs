//! Pacing services: the frame limiter and the gravity clock.
//!
//! Both have a pure form that takes the current `Instant` explicitly, so the
//! timing rules can be tested without sleeping.

use std::thread;
use std::time::{Duration, Instant};

use crate::types::GameConfig;

/// Keeps the loop at a fixed frame rate by sleeping out the rest of each frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            frame_start: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current frame; zero once it has overrun.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Close the current frame at `now` and return how long to sleep.
    /// The next frame starts when that sleep ends.
    pub fn finish_frame_at(&mut self, now: Instant) -> Duration {
        let wait = self.remaining(now);
        self.frame_start = now + wait;
        wait
    }

    /// Sleep out the remainder of the current frame.
    pub fn sleep(&mut self) {
        let wait = self.finish_frame_at(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}

/// Fires at most once per call, once per `interval` on average.
///
/// Time past the interval is carried into the next period so that late
/// polls do not accumulate drift.
#[derive(Debug, Clone)]
pub struct GravityClock {
    interval: Duration,
    last: Instant,
    carry: Duration,
}

impl GravityClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
            carry: Duration::ZERO,
        }
    }

    /// Whether a tick is due at `now`.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        let total = now.saturating_duration_since(self.last) + self.carry;
        if total > self.interval {
            self.last = now;
            self.carry = total - self.interval;
            true
        } else {
            false
        }
    }

    pub fn should_fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    /// Leftover time carried into the current period
    pub fn carry(&self) -> Duration {
        self.carry
    }
}

/// What the game loop needs from its time sources
pub trait Pacing {
    /// True when a gravity tick should run this iteration
    fn gravity_due(&mut self) -> bool;
    /// Block until the next frame should start
    fn wait_frame(&mut self);
}

/// Wall-clock pacing: a [`FramePacer`] plus a [`GravityClock`]
#[derive(Debug, Clone)]
pub struct RealTimePacing {
    frame: FramePacer,
    gravity: GravityClock,
}

impl RealTimePacing {
    pub fn new(frame_interval: Duration, gravity_interval: Duration) -> Self {
        Self {
            frame: FramePacer::new(frame_interval),
            gravity: GravityClock::new(gravity_interval),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.frame_interval(), config.gravity_interval())
    }
}

impl Pacing for RealTimePacing {
    fn gravity_due(&mut self) -> bool {
        self.gravity.should_fire()
    }

    fn wait_frame(&mut self) {
        self.frame.sleep();
    }
}
