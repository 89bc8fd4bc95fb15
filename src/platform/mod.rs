//! Platform abstraction layer
//!
//! The simulation never reads the wall clock itself; hosts hand it a
//! `TimeSource`. Times are milliseconds as `f64` so browser timestamps can be
//! passed straight through.

use std::cell::Cell;
use std::time::Instant;

/// Monotonically non-decreasing time in milliseconds
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Real time measured from when the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Host-driven clock for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms.max(0.0));
    }

    /// Jump to an absolute time; going backwards is ignored
    pub fn set(&self, ms: f64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
