//! Player input
//!
//! The host writes key, pointer and click events into `InputState` whenever
//! they arrive. At the start of each step the simulation takes one
//! `TickInput` snapshot, so input never changes mid-frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::angle_between;

/// Cardinal movement directions (screen space: up is -y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Map a keyboard key (`KeyboardEvent.key` or `.code`) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "KeyW" | "ArrowUp" => Some(Self::Up),
            "s" | "S" | "KeyS" | "ArrowDown" => Some(Self::Down),
            "a" | "A" | "KeyA" | "ArrowLeft" => Some(Self::Left),
            "d" | "D" | "KeyD" | "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn is_held(&self, dir: MoveDirection) -> bool {
        match dir {
            MoveDirection::Up => self.up,
            MoveDirection::Down => self.down,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: MoveDirection, held: bool) {
        match dir {
            MoveDirection::Up => self.up = held,
            MoveDirection::Down => self.down = held,
            MoveDirection::Left => self.left = held,
            MoveDirection::Right => self.right = held,
        }
    }

    /// A vertical and a horizontal key are both down
    pub fn is_diagonal(&self) -> bool {
        (self.up || self.down) && (self.left || self.right)
    }
}

/// Where the player is aiming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Aim {
    /// Absolute angle in radians
    Angle(f32),
    /// Pointer position in arena coordinates
    Point(Vec2),
}

impl Aim {
    /// Resolve to an angle as seen from `origin`
    pub fn angle_from(&self, origin: Vec2) -> f32 {
        match *self {
            Aim::Angle(a) => a,
            Aim::Point(p) => angle_between(origin, p),
        }
    }
}

/// Immutable input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub held: HeldKeys,
    /// Latest aim; `None` keeps the previous facing
    pub aim: Option<Aim>,
    /// A fire request arrived since the last step
    pub fire: bool,
}

/// Host-facing input recorder
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HeldKeys,
    aim: Option<Aim>,
    fire_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: MoveDirection) {
        self.held.set(dir, true);
    }

    pub fn release(&mut self, dir: MoveDirection) {
        self.held.set(dir, false);
    }

    /// Key event by name; returns false for keys that don't move the player
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match MoveDirection::from_key(key) {
            Some(dir) => {
                self.held.set(dir, pressed);
                true
            }
            None => false,
        }
    }

    pub fn is_movement_key_held(&self, dir: MoveDirection) -> bool {
        self.held.is_held(dir)
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn set_pointer(&mut self, point: Vec2) {
        self.aim = Some(Aim::Point(point));
    }

    pub fn set_aim_angle(&mut self, angle: f32) {
        self.aim = Some(Aim::Angle(angle));
    }

    /// Aim angle relative to the player, if any aim input has arrived
    pub fn current_aim_angle(&self, player_pos: Vec2) -> Option<f32> {
        self.aim.map(|aim| aim.angle_from(player_pos))
    }

    /// Queue a shot; several clicks between two frames still count once
    pub fn request_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Snapshot for the next step, consuming the pending fire request
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            held: self.held,
            aim: self.aim,
            fire: self.fire_requested,
        };
        self.fire_requested = false;
        input
    }
}

/// Fire rate limiter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireControl {
    cooldown_ms: f64,
    last_fire_ms: Option<f64>,
}

impl FireControl {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_fire_ms: None,
        }
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    pub fn last_fire_ms(&self) -> Option<f64> {
        self.last_fire_ms
    }

    pub fn ready(&self, now_ms: f64) -> bool {
        match self.last_fire_ms {
            Some(last) => now_ms - last >= self.cooldown_ms,
            None => true,
        }
    }

    /// Record a shot at `now_ms` if the cooldown has elapsed
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if !self.ready(now_ms) {
            return false;
        }
        self.last_fire_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_fire_cooldown() {
        let mut fire = FireControl::new(300.0);
        assert!(fire.try_fire(1000.0));
        assert!(!fire.try_fire(1100.0));
        assert!(!fire.try_fire(1299.9));
        assert!(fire.try_fire(1300.0));
        assert_eq!(fire.last_fire_ms(), Some(1300.0));
    }

    #[test]
    fn test_failed_fire_has_no_side_effects() {
        let mut fire = FireControl::new(300.0);
        assert!(fire.try_fire(0.0));
        assert!(!fire.try_fire(200.0));
        // Cooldown is still measured from the successful shot
        assert!(fire.try_fire(300.0));
    }

    #[test]
    fn test_take_tick_input_consumes_fire() {
        let mut input = InputState::new();
        input.press(MoveDirection::Up);
        input.request_fire();
        input.request_fire();

        let first = input.take_tick_input();
        assert!(first.fire);
        assert!(first.held.up);

        let second = input.take_tick_input();
        assert!(!second.fire);
        assert!(second.held.up);
    }

    #[test]
    fn test_aim_from_pointer() {
        let mut input = InputState::new();
        assert_eq!(input.current_aim_angle(Vec2::ZERO), None);

        input.set_pointer(Vec2::new(100.0, 200.0));
        let angle = input
            .current_aim_angle(Vec2::new(100.0, 100.0))
            .expect("aim set");
        assert!((angle - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_key_mapping() {
        let mut input = InputState::new();
        assert!(input.key_event("d", true));
        assert!(input.key_event("ArrowUp", true));
        assert!(!input.key_event("q", true));
        assert!(input.is_movement_key_held(MoveDirection::Right));
        assert!(input.is_movement_key_held(MoveDirection::Up));
        assert!(input.held().is_diagonal());

        input.key_event("D", false);
        assert!(!input.is_movement_key_held(MoveDirection::Right));
        assert!(!input.held().is_diagonal());
    }
}
