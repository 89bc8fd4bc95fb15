//! Floating damage numbers
//!
//! Each hit leaves a number at the target's position that fades out over a
//! fixed duration and is then dropped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageEvent {
    pub pos: Vec2,
    pub amount: i32,
    /// Headshot
    pub critical: bool,
    pub created_at_ms: f64,
}

impl DamageEvent {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.created_at_ms).max(0.0)
    }
}

/// Opacity for something `age_ms` into a `duration_ms` fade
pub fn fade_opacity(age_ms: f64, duration_ms: f64) -> f32 {
    (1.0 - age_ms / duration_ms).clamp(0.0, 1.0) as f32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsTracker {
    events: Vec<DamageEvent>,
    duration_ms: f64,
}

impl EffectsTracker {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            events: Vec::new(),
            duration_ms,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn push(&mut self, event: DamageEvent) {
        self.events.push(event);
    }

    /// Drop everything at least `duration_ms` old
    pub fn prune(&mut self, now_ms: f64) {
        let duration = self.duration_ms;
        self.events.retain(|e| now_ms - e.created_at_ms < duration);
    }

    pub fn opacity(&self, event: &DamageEvent, now_ms: f64) -> f32 {
        fade_opacity(event.age_ms(now_ms), self.duration_ms)
    }

    /// Live events in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, DamageEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
