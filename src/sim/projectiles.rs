//! In-flight projectiles
//!
//! Projectiles fly in a straight line at a fixed per-frame speed until they
//! hit the target, run out of range, or leave the arena.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::target::Target;
use crate::direction;

/// Why a shot counted as a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    OutOfRange,
    OutOfBounds,
}

/// How a projectile left the live set this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileFate {
    Hit,
    Missed(MissReason),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Direction of flight (radians)
    pub angle: f32,
    /// Pixels per frame
    pub speed: f32,
    pub traveled: f32,
    pub max_range: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, angle: f32, speed: f32, max_range: f32) -> Self {
        Self {
            id,
            pos,
            angle,
            speed,
            traveled: 0.0,
            max_range,
        }
    }

    /// Per-frame displacement
    pub fn velocity(&self) -> Vec2 {
        direction(self.angle) * self.speed
    }

    pub fn advance(&mut self) {
        let step = self.velocity();
        self.pos += step;
        self.traveled += step.length();
    }

    /// Hit test against the target
    ///
    /// The threshold is `speed + target.radius`, not the exact contact
    /// distance, so fast projectiles can't step over the target between
    /// frames.
    pub fn hits(&self, target: &Target) -> bool {
        self.pos.distance(target.pos) < self.speed + target.radius
    }

    /// Whether this projectile is spent, and why
    pub fn expiry(&self, arena: &Arena) -> Option<MissReason> {
        if self.traveled >= self.max_range {
            Some(MissReason::OutOfRange)
        } else if !arena.contains(self.pos) {
            Some(MissReason::OutOfBounds)
        } else {
            None
        }
    }

    /// Far end of the cosmetic tracer line (the near end is `pos`)
    pub fn tracer_tail(&self, tracer_length: f32) -> Vec2 {
        self.pos - direction(self.angle) * tracer_length
    }
}

/// All live projectiles, kept in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileSet {
    live: Vec<Projectile>,
    next_id: u32,
}

impl ProjectileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, pos: Vec2, angle: f32, speed: f32, max_range: f32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(Projectile::new(id, pos, angle, speed, max_range));
        id
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Projectile> {
        self.live.iter()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Advance every projectile once and settle the ones that are done
    ///
    /// Each projectile is visited exactly once, in spawn order. The hit test
    /// runs before the expiry test, so a projectile gets at most one fate.
    /// `on_resolve` sees the target as it is at that moment; a kill earlier in
    /// the pass means later projectiles are tested against the replacement.
    pub fn advance_and_collide<F>(&mut self, arena: &Arena, target: &mut Target, mut on_resolve: F)
    where
        F: FnMut(&mut Target, &Projectile, ProjectileFate),
    {
        let mut survivors = Vec::with_capacity(self.live.len());
        for mut projectile in self.live.drain(..) {
            projectile.advance();

            if projectile.hits(target) {
                on_resolve(target, &projectile, ProjectileFate::Hit);
            } else if let Some(reason) = projectile.expiry(arena) {
                on_resolve(target, &projectile, ProjectileFate::Missed(reason));
            } else {
                survivors.push(projectile);
            }
        }
        self.live = survivors;
    }
}

impl<'a> IntoIterator for &'a ProjectileSet {
    type Item = &'a Projectile;
    type IntoIter = std::slice::Iter<'a, Projectile>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn arena() -> Arena {
        Arena::new(1000.0, 800.0, 20.0).expect("valid arena")
    }

    fn target_at(pos: Vec2) -> Target {
        Target {
            pos,
            radius: 20.0,
            heading: 0.0,
            speed: 0.0,
            hp: 100,
            max_hp: 100,
        }
    }

    fn far_target() -> Target {
        target_at(Vec2::new(900.0, 700.0))
    }

    #[test]
    fn test_advance_accumulates_distance() {
        let mut p = Projectile::new(0, Vec2::new(100.0, 100.0), PI / 2.0, 70.0, 3000.0);
        p.advance();
        p.advance();
        assert!((p.traveled - 140.0).abs() < 1e-3);
        assert!((p.pos - Vec2::new(100.0, 240.0)).length() < 1e-3);
    }

    #[test]
    fn test_generous_hit_radius() {
        let p = Projectile::new(0, Vec2::new(0.0, 0.0), 0.0, 70.0, 3000.0);
        // 89 px away: outside the bodies, inside speed + radius
        assert!(p.hits(&target_at(Vec2::new(89.0, 0.0))));
        assert!(!p.hits(&target_at(Vec2::new(90.0, 0.0))));
    }

    #[test]
    fn test_range_expiry() {
        let arena = Arena::new(100_000.0, 800.0, 20.0).expect("valid arena");
        let mut set = ProjectileSet::new();
        set.spawn(Vec2::new(100.0, 400.0), 0.0, 70.0, 200.0);
        let mut target = target_at(Vec2::new(90_000.0, 100.0));

        let mut fates = Vec::new();
        for _ in 0..5 {
            set.advance_and_collide(&arena, &mut target, |_, p, fate| {
                fates.push((p.traveled, p.max_range, fate));
            });
        }
        assert_eq!(fates.len(), 1);
        let (traveled, max_range, fate) = fates[0];
        assert_eq!(fate, ProjectileFate::Missed(MissReason::OutOfRange));
        assert!(traveled >= max_range);
        assert!(set.is_empty());
    }

    #[test]
    fn test_bounds_expiry() {
        let arena = arena();
        let mut set = ProjectileSet::new();
        set.spawn(Vec2::new(950.0, 400.0), 0.0, 70.0, 3000.0);
        let mut target = far_target();

        let mut fates = Vec::new();
        set.advance_and_collide(&arena, &mut target, |_, p, fate| {
            fates.push((p.pos, fate));
        });
        assert_eq!(fates.len(), 1);
        let (pos, fate) = fates[0];
        assert_eq!(fate, ProjectileFate::Missed(MissReason::OutOfBounds));
        assert!(pos.x > arena.width - arena.border);
    }

    #[test]
    fn test_hit_wins_over_expiry() {
        // Projectile that leaves the arena on the same frame it reaches the target
        let arena = arena();
        let mut set = ProjectileSet::new();
        set.spawn(Vec2::new(950.0, 400.0), 0.0, 70.0, 3000.0);
        let mut target = target_at(Vec2::new(960.0, 400.0));

        let mut fates = Vec::new();
        set.advance_and_collide(&arena, &mut target, |_, _, fate| fates.push(fate));
        assert_eq!(fates, vec![ProjectileFate::Hit]);
    }

    #[test]
    fn test_every_projectile_visited_once() {
        let arena = arena();
        let mut set = ProjectileSet::new();
        let mut target = target_at(Vec2::new(500.0, 400.0));
        // Alternate hitters (aimed at target) and flyers (heading away)
        for i in 0..10 {
            if i % 2 == 0 {
                set.spawn(Vec2::new(450.0, 400.0), 0.0, 70.0, 3000.0);
            } else {
                set.spawn(Vec2::new(100.0, 100.0), PI, 10.0, 3000.0);
            }
        }

        let mut seen = Vec::new();
        set.advance_and_collide(&arena, &mut target, |_, p, fate| {
            assert_eq!(fate, ProjectileFate::Hit);
            seen.push(p.id);
        });
        assert_eq!(seen, vec![0, 2, 4, 6, 8]);
        assert_eq!(set.len(), 5);
        assert!(set.iter().all(|p| p.id % 2 == 1));
        // Survivors moved exactly one step
        assert!(set.iter().all(|p| (p.traveled - 10.0).abs() < 1e-4));
    }

    #[test]
    fn test_tracer_tail_trails_behind() {
        let p = Projectile::new(0, Vec2::new(500.0, 400.0), 0.0, 70.0, 3000.0);
        let tail = p.tracer_tail(120.0);
        assert!((tail - Vec2::new(380.0, 400.0)).length() < 1e-4);
    }
}
