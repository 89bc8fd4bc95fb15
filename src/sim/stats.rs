//! Shot statistics: lifetime counters plus a short rolling window

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Hit percentage rounded to two decimals; 0.0 when nothing was fired
pub fn accuracy(shots: u32, hits: u32) -> f64 {
    if shots == 0 {
        return 0.0;
    }
    let pct = hits as f64 / shots as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsTracker {
    total_shots: u32,
    hit_shots: u32,
    /// Most recent outcomes, oldest first
    recent: VecDeque<bool>,
    window: usize,
}

impl StatsTracker {
    pub fn new(window: usize) -> Self {
        Self {
            total_shots: 0,
            hit_shots: 0,
            recent: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    pub fn record_shot(&mut self) {
        self.total_shots += 1;
    }

    pub fn record_hit(&mut self) {
        self.hit_shots += 1;
    }

    /// Append a resolved shot, evicting the oldest past the window size
    pub fn push_outcome(&mut self, hit: bool) {
        self.recent.push_back(hit);
        while self.recent.len() > self.window {
            self.recent.pop_front();
        }
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    pub fn hit_shots(&self) -> u32 {
        self.hit_shots
    }

    pub fn recent(&self) -> impl Iterator<Item = bool> + '_ {
        self.recent.iter().copied()
    }

    pub fn recent_len(&self) -> usize {
        self.recent.len()
    }

    pub fn lifetime_accuracy(&self) -> f64 {
        accuracy(self.total_shots, self.hit_shots)
    }

    pub fn recent_accuracy(&self) -> f64 {
        let hits = self.recent.iter().filter(|&&hit| hit).count() as u32;
        accuracy(self.recent.len() as u32, hits)
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new(crate::consts::RECENT_SHOT_WINDOW)
    }
}
