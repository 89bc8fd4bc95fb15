//! Per-frame simulation step
//!
//! One call advances the game by one displayed frame. Movement speeds are in
//! pixels per frame; only the target's dodge steering is scaled by elapsed
//! time.

use super::combat::CombatResolver;
use super::input::TickInput;
use super::projectiles::ProjectileFate;
use super::state::{GameEvent, SimulationState};

/// Fire from the player's muzzle if the cooldown allows
///
/// Returns the new projectile's id, or `None` while still cooling down (the
/// request is simply dropped).
pub fn try_fire(state: &mut SimulationState, now_ms: f64) -> Option<u32> {
    if !state.player.fire.try_fire(now_ms) {
        return None;
    }

    let muzzle = state.player.muzzle();
    let angle = state.player.aim_angle;
    let id = state.projectiles.spawn(
        muzzle,
        angle,
        state.tuning.projectile_speed,
        state.tuning.projectile_range,
    );
    state.stats.record_shot();
    log::debug!(
        "Shot {} fired at {:.2} rad from ({:.1}, {:.1})",
        id,
        angle,
        muzzle.x,
        muzzle.y
    );
    Some(id)
}

/// Advance the game state by one frame
///
/// Order: aim and fire, player movement, projectiles (hits before expiry),
/// target dodge and movement, damage number cleanup.
pub fn step(state: &mut SimulationState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Time never runs backwards inside the simulation
    let now_ms = state.last_update_ms.map_or(now_ms, |last| now_ms.max(last));
    let dt_ms = state.last_update_ms.map_or(0.0, |last| now_ms - last);
    let dt_secs = (dt_ms / 1000.0) as f32;
    state.last_update_ms = Some(now_ms);
    state.now_ms = now_ms;
    state.frame += 1;

    if let Some(aim) = input.aim {
        state.player.aim_angle = aim.angle_from(state.player.pos);
    }

    if input.fire {
        if let Some(projectile_id) = try_fire(state, now_ms) {
            events.push(GameEvent::ShotFired {
                projectile_id,
                angle: state.player.aim_angle,
            });
        }
    }

    state.player.apply_movement(&input.held, &state.arena);

    resolve_projectiles(state, now_ms, &mut events);

    state.target.dodge(&state.projectiles, dt_secs, &state.tuning);
    state.target.advance(&state.arena, &mut state.rng);

    state.effects.prune(now_ms);

    events
}

fn resolve_projectiles(state: &mut SimulationState, now_ms: f64, events: &mut Vec<GameEvent>) {
    let SimulationState {
        rng,
        arena,
        tuning,
        target,
        projectiles,
        stats,
        effects,
        score,
        ..
    } = state;

    let mut combat = CombatResolver {
        tuning: &*tuning,
        arena: &*arena,
        rng,
        stats,
        effects,
        score,
    };

    projectiles.advance_and_collide(&*arena, target, |target, projectile, fate| match fate {
        ProjectileFate::Hit => {
            let report = combat.resolve(target, now_ms);
            combat.stats.push_outcome(true);
            log::debug!(
                "Shot {} hit for {}{}",
                projectile.id,
                report.damage,
                if report.headshot { " (headshot)" } else { "" }
            );
            events.push(GameEvent::TargetHit {
                damage: report.damage,
                headshot: report.headshot,
                pos: report.pos,
            });

            if report.defeated {
                log::info!(
                    "Target down! Score {} - next target speed {:.1}",
                    *combat.score,
                    target.speed
                );
                events.push(GameEvent::TargetDefeated {
                    score: *combat.score,
                    next_speed: target.speed,
                });
            }
        }
        ProjectileFate::Missed(reason) => {
            combat.stats.push_outcome(false);
            log::debug!(
                "Shot {} missed ({:?}) after {:.0}px",
                projectile.id,
                reason,
                projectile.traveled
            );
            events.push(GameEvent::ShotMissed {
                projectile_id: projectile.id,
                reason,
            });
        }
    });
}
