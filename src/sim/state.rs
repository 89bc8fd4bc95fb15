//! Simulation state and events
//!
//! Everything that changes during play lives in `SimulationState`; `step`
//! takes it by mutable reference once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::effects::EffectsTracker;
use super::player::Player;
use super::projectiles::{MissReason, ProjectileSet};
use super::stats::StatsTracker;
use super::target::Target;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Notable things that happened during one step, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { projectile_id: u32, angle: f32 },
    TargetHit { damage: i32, headshot: bool, pos: Vec2 },
    ShotMissed { projectile_id: u32, reason: MissReason },
    /// Target died; `next_speed` is its replacement's speed
    TargetDefeated { score: u32, next_speed: f32 },
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub arena: Arena,
    pub tuning: Tuning,
    pub player: Player,
    pub target: Target,
    pub projectiles: ProjectileSet,
    pub stats: StatsTracker,
    pub effects: EffectsTracker,
    pub score: u32,
    /// Steps taken
    pub frame: u64,
    /// Time of the latest step
    pub now_ms: f64,
    /// Time of the step before that, `None` before the first step
    pub last_update_ms: Option<f64>,
}

impl SimulationState {
    /// New run: player at the arena center, target somewhere random
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if !arena.fits(tuning.player_radius) || !arena.fits(tuning.target_radius) {
            return Err(ConfigError::InvalidArena {
                width: arena.width,
                height: arena.height,
                border: arena.border,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(arena.center(), &tuning);
        let target = Target::spawn(&arena, &tuning, tuning.target_start_speed, &mut rng);

        Ok(Self {
            seed,
            rng,
            arena,
            player,
            target,
            projectiles: ProjectileSet::new(),
            stats: StatsTracker::new(tuning.recent_shot_window),
            effects: EffectsTracker::new(tuning.damage_number_duration_ms),
            score: 0,
            frame: 0,
            now_ms: 0.0,
            last_update_ms: None,
            tuning,
        })
    }

    /// Direct RNG access for hosts that script extra randomness
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let arena = Arena::new(1000.0, 800.0, 20.0).expect("valid arena");
        let state = SimulationState::new(arena, Tuning::default(), 1).expect("valid state");
        assert_eq!(state.player.pos, Vec2::new(500.0, 400.0));
        assert!(arena.contains(state.target.pos));
        assert_eq!(state.target.hp, 100);
        assert_eq!(state.target.speed, 2.0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_same_seed_same_target() {
        let arena = Arena::new(1000.0, 800.0, 20.0).expect("valid arena");
        let a = SimulationState::new(arena, Tuning::default(), 77).expect("valid state");
        let b = SimulationState::new(arena, Tuning::default(), 77).expect("valid state");
        assert_eq!(a.target.pos, b.target.pos);
        assert_eq!(a.target.heading, b.target.heading);
    }

    #[test]
    fn test_rejects_arena_too_small_for_bodies() {
        let arena = Arena::new(100.0, 100.0, 20.0).expect("valid arena");
        let tuning = Tuning {
            target_radius: 40.0,
            ..Default::default()
        };
        assert!(SimulationState::new(arena, tuning, 1).is_err());
    }
}
