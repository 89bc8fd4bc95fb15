//! Hit resolution: damage rolls, kills and respawns

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::effects::{DamageEvent, EffectsTracker};
use super::stats::StatsTracker;
use super::target::Target;
use crate::tuning::Tuning;

/// What a single confirmed hit did
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitReport {
    pub damage: i32,
    pub headshot: bool,
    /// Where the target was when struck
    pub pos: Vec2,
    /// The hit finished the target off and a new one spawned
    pub defeated: bool,
}

/// Roll for a headshot and return `(damage, headshot)`
pub fn roll_damage<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> (i32, bool) {
    if rng.random_bool(tuning.headshot_chance) {
        (tuning.headshot_damage, true)
    } else {
        (tuning.base_damage, false)
    }
}

/// Everything a hit writes to besides the target itself
pub struct CombatResolver<'a, R: Rng + ?Sized> {
    pub tuning: &'a Tuning,
    pub arena: &'a Arena,
    pub rng: &'a mut R,
    pub stats: &'a mut StatsTracker,
    pub effects: &'a mut EffectsTracker,
    pub score: &'a mut u32,
}

impl<R: Rng + ?Sized> CombatResolver<'_, R> {
    /// Apply one hit to `target`, replacing it if it dies
    ///
    /// This is the only place score goes up and the only place target speed
    /// ramps.
    pub fn resolve(&mut self, target: &mut Target, now_ms: f64) -> HitReport {
        let (damage, headshot) = roll_damage(self.tuning, &mut *self.rng);
        target.hp -= damage;
        self.stats.record_hit();

        let pos = target.pos;
        self.effects.push(DamageEvent {
            pos,
            amount: damage,
            critical: headshot,
            created_at_ms: now_ms,
        });

        let defeated = target.is_defeated();
        if defeated {
            *self.score += 1;
            *target = target.respawn(self.arena, self.tuning, &mut *self.rng);
        }

        HitReport {
            damage,
            headshot,
            pos,
            defeated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Fixture {
        tuning: Tuning,
        arena: Arena,
        rng: Pcg32,
        stats: StatsTracker,
        effects: EffectsTracker,
        score: u32,
    }

    impl Fixture {
        fn new(headshot_chance: f64) -> Self {
            let tuning = Tuning {
                headshot_chance,
                ..Default::default()
            };
            Self {
                arena: Arena::new(1000.0, 800.0, 20.0).expect("valid arena"),
                rng: Pcg32::seed_from_u64(42),
                stats: StatsTracker::new(tuning.recent_shot_window),
                effects: EffectsTracker::new(tuning.damage_number_duration_ms),
                score: 0,
                tuning,
            }
        }

        fn hit(&mut self, target: &mut Target, now_ms: f64) -> HitReport {
            CombatResolver {
                tuning: &self.tuning,
                arena: &self.arena,
                rng: &mut self.rng,
                stats: &mut self.stats,
                effects: &mut self.effects,
                score: &mut self.score,
            }
            .resolve(target, now_ms)
        }
    }

    fn target() -> Target {
        Target {
            pos: Vec2::new(700.0, 400.0),
            radius: 20.0,
            heading: 0.0,
            speed: 2.0,
            hp: 100,
            max_hp: 100,
        }
    }

    #[test]
    fn test_forced_body_shot() {
        let mut fx = Fixture::new(0.0);
        let mut t = target();
        let report = fx.hit(&mut t, 10.0);
        assert_eq!(report.damage, 50);
        assert!(!report.headshot);
        assert!(!report.defeated);
        assert_eq!(t.hp, 50);
        assert_eq!(fx.stats.hit_shots(), 1);
        assert_eq!(fx.score, 0);

        let event = fx.effects.iter().next().expect("damage number");
        assert_eq!(event.amount, 50);
        assert!(!event.critical);
        assert_eq!(event.pos, Vec2::new(700.0, 400.0));
        assert_eq!(event.created_at_ms, 10.0);
    }

    #[test]
    fn test_forced_headshot_kills_and_respawns() {
        let mut fx = Fixture::new(1.0);
        let mut t = target();
        let report = fx.hit(&mut t, 0.0);
        assert_eq!(report.damage, 150);
        assert!(report.headshot);
        assert!(report.defeated);
        assert_eq!(fx.score, 1);
        assert_eq!(t.hp, t.max_hp);
        assert_eq!(t.speed, 2.5);
        assert!(fx.effects.iter().all(|e| e.critical));
    }

    #[test]
    fn test_two_body_shots_respawn_once() {
        let mut fx = Fixture::new(0.0);
        let mut t = target();
        assert!(!fx.hit(&mut t, 0.0).defeated);
        assert!(fx.hit(&mut t, 300.0).defeated);
        assert_eq!(fx.score, 1);
        assert_eq!(t.speed, 2.5);
        assert_eq!(t.hp, 100);
        assert_eq!(fx.effects.len(), 2);
    }

    #[test]
    fn test_headshot_rate_is_roughly_the_chance() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let headshots = (0..10_000)
            .filter(|_| roll_damage(&tuning, &mut rng).1)
            .count();
        assert!((700..1300).contains(&headshots), "got {}", headshots);
    }
}
