//! Read-only view of one frame for renderers and HUDs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::state::SimulationState;
use crate::angle_between;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub aim_angle: f32,
    pub gun_length: f32,
    pub gun_width: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub pos: Vec2,
    pub radius: f32,
    pub heading: f32,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Far end of the tracer; the near end is `pos`
    pub tracer_tail: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub pos: Vec2,
    pub amount: i32,
    pub critical: bool,
    /// 1.0 when fresh, fading to 0.0 at expiry
    pub opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub now_ms: f64,
    pub arena: Arena,
    pub player: PlayerView,
    pub target: TargetView,
    /// Direction of the compass arrow around the player
    pub angle_to_target: f32,
    pub projectiles: Vec<ProjectileView>,
    pub damage_numbers: Vec<DamageNumberView>,
    pub score: u32,
    pub total_shots: u32,
    pub hit_shots: u32,
    /// Percent, two decimals
    pub lifetime_accuracy: f64,
    /// Percent over the last few shots, two decimals
    pub recent_accuracy: f64,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let tuning = &state.tuning;
        let now = state.now_ms;

        let projectiles = state
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                pos: p.pos,
                angle: p.angle,
                radius: tuning.projectile_radius,
                tracer_tail: p.tracer_tail(tuning.tracer_length),
            })
            .collect();

        let damage_numbers = state
            .effects
            .iter()
            .map(|e| DamageNumberView {
                pos: e.pos,
                amount: e.amount,
                critical: e.critical,
                opacity: state.effects.opacity(e, now),
            })
            .collect();

        Self {
            frame: state.frame,
            now_ms: now,
            arena: state.arena,
            player: PlayerView {
                pos: state.player.pos,
                radius: state.player.radius,
                aim_angle: state.player.aim_angle,
                gun_length: state.player.gun_length,
                gun_width: state.player.gun_width,
            },
            target: TargetView {
                pos: state.target.pos,
                radius: state.target.radius,
                heading: state.target.heading,
                hp: state.target.hp,
                max_hp: state.target.max_hp,
            },
            angle_to_target: angle_between(state.player.pos, state.target.pos),
            projectiles,
            damage_numbers,
            score: state.score,
            total_shots: state.stats.total_shots(),
            hit_shots: state.stats.hit_shots(),
            lifetime_accuracy: state.stats.lifetime_accuracy(),
            recent_accuracy: state.stats.recent_accuracy(),
        }
    }
}
