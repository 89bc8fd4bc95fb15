//! Sharpshot - A 2D aim trainer
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player, target, projectiles, combat, stats)
//! - `platform`: Time sources the host plugs in
//! - `tuning`: Data-driven game balance
//! - `game`: Driver tying clock, input and simulation together
//! - `renderer`: Backend-agnostic geometry and HUD text for a frame snapshot

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena wall thickness
    pub const ARENA_BORDER: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const GUN_LENGTH: f32 = 50.0;
    pub const GUN_WIDTH: f32 = 10.0;
    /// Pixels per frame along each held axis
    pub const PLAYER_MOVE_SPEED: f32 = 5.0;
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Projectile defaults (pixels per frame)
    pub const PROJECTILE_SPEED: f32 = 70.0;
    pub const PROJECTILE_RANGE: f32 = 3000.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const TRACER_LENGTH: f32 = 120.0;

    /// Target defaults
    pub const TARGET_RADIUS: f32 = 20.0;
    pub const TARGET_START_SPEED: f32 = 2.0;
    /// Added to target speed after every kill
    pub const TARGET_SPEED_INCREMENT: f32 = 0.5;
    pub const TARGET_MAX_HP: i32 = 100;
    /// Heading change in radians per second while dodging
    pub const DODGE_SPEED: f32 = 10.0;
    /// |cos| of the angle between heading and incoming fire that triggers a dodge (~37°)
    pub const DODGE_THRESHOLD: f32 = 0.8;

    /// Combat
    pub const BASE_DAMAGE: i32 = 50;
    pub const HEADSHOT_DAMAGE: i32 = 150;
    pub const HEADSHOT_CHANCE: f64 = 0.1;

    /// Damage number lifetime
    pub const DAMAGE_NUMBER_DURATION_MS: f64 = 2000.0;
    /// Size of the short-term accuracy window
    pub const RECENT_SHOT_WINDOW: usize = 5;
}

/// Unit vector pointing along `angle`
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    direction(theta) * r
}

/// Angle of the vector from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_angle_between() {
        let a = angle_between(Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0));
        assert!((a - PI / 2.0).abs() < 1e-6);
        let b = angle_between(Vec2::ZERO, Vec2::new(-3.0, 0.0));
        assert!((b.abs() - PI).abs() < 1e-6);
    }
}
