//! The target: wanders on its own, steers away from incoming fire, and comes
//! back faster every time it is defeated.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::projectiles::Projectile;
use crate::direction;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    /// Direction of travel (radians, not normalized)
    pub heading: f32,
    /// Pixels per frame
    pub speed: f32,
    pub hp: i32,
    pub max_hp: i32,
}

impl Target {
    /// Fresh target at a random interior position with a random heading
    pub fn spawn<R: Rng + ?Sized>(arena: &Arena, tuning: &Tuning, speed: f32, rng: &mut R) -> Self {
        let pos = arena.random_interior_point(rng);
        let heading = rng.random::<f32>() * TAU;
        Self {
            pos,
            radius: tuning.target_radius,
            heading,
            speed,
            hp: tuning.target_max_hp,
            max_hp: tuning.target_max_hp,
        }
    }

    /// Replacement after a kill: one speed step faster, full health
    pub fn respawn<R: Rng + ?Sized>(&self, arena: &Arena, tuning: &Tuning, rng: &mut R) -> Self {
        Self::spawn(arena, tuning, self.speed + tuning.target_speed_increment, rng)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn heading_vector(&self) -> Vec2 {
        direction(self.heading)
    }

    /// Steer away from live projectiles
    ///
    /// Each projectile is judged independently against the heading as it
    /// stands after the previous ones, so iteration order matters.
    pub fn dodge<'a, I>(&mut self, projectiles: I, dt_secs: f32, tuning: &Tuning)
    where
        I: IntoIterator<Item = &'a Projectile>,
    {
        let turn = tuning.dodge_speed * dt_secs;
        for projectile in projectiles {
            let to_target = (self.pos - projectile.pos).normalize_or_zero();
            let alignment = to_target.dot(self.heading_vector());
            if alignment > tuning.dodge_threshold {
                self.heading += turn;
            } else if alignment < -tuning.dodge_threshold {
                self.heading -= turn;
            }
        }
    }

    /// Move one frame along the heading and bounce off the walls
    ///
    /// Every wall touched picks a new heading in [0, π), whichever wall it
    /// was.
    pub fn advance<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) -> bool {
        let next = self.pos + self.heading_vector() * self.speed;
        let (clamped, contact) = arena.clamp_circle(next, self.radius);
        self.pos = clamped;
        for _ in 0..contact.count() {
            self.heading = rng.random::<f32>() * PI;
        }
        contact.any()
    }
}
