//! The player: a circle with a gun that walks on WASD and aims at the pointer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::input::{FireControl, HeldKeys};
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Facing / aim angle (radians)
    pub aim_angle: f32,
    /// Pixels per frame along a single axis
    pub move_speed: f32,
    pub gun_length: f32,
    pub gun_width: f32,
    /// Shot rate limiter
    pub fire: FireControl,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.player_radius,
            aim_angle: 0.0,
            move_speed: tuning.move_speed,
            gun_length: tuning.gun_length,
            gun_width: tuning.gun_width,
            fire: FireControl::new(tuning.fire_cooldown_ms),
        }
    }

    /// Where projectiles leave the gun
    pub fn muzzle(&self) -> Vec2 {
        self.pos + polar_to_cartesian(self.radius + self.gun_length, self.aim_angle)
    }

    /// Per-frame displacement for the held keys
    ///
    /// Diagonals are scaled by 1/√2 so they are no faster than straight
    /// movement. Opposite keys cancel.
    pub fn intended_velocity(&self, held: &HeldKeys) -> Vec2 {
        let speed = if held.is_diagonal() {
            self.move_speed / std::f32::consts::SQRT_2
        } else {
            self.move_speed
        };

        let mut vel = Vec2::ZERO;
        if held.up {
            vel.y -= speed;
        }
        if held.down {
            vel.y += speed;
        }
        if held.left {
            vel.x -= speed;
        }
        if held.right {
            vel.x += speed;
        }
        vel
    }

    /// Move for one frame and stop at the walls
    pub fn apply_movement(&mut self, held: &HeldKeys, arena: &Arena) {
        let next = self.pos + self.intended_velocity(held);
        let (clamped, _) = arena.clamp_circle(next, self.radius);
        self.pos = clamped;
    }
}
