//! Backend-agnostic rendering
//!
//! Turns a `FrameSnapshot` into a triangle list plus HUD text. Any backend
//! (WebGPU, canvas, software) can upload or rasterize the result.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::{DamageLabel, damage_labels, hud_lines};
pub use vertex::{Vertex, colors};

use crate::sim::FrameSnapshot;

const BODY_SEGMENTS: u32 = 32;
const PROJECTILE_SEGMENTS: u32 = 8;
const TRACER_WIDTH: f32 = 2.0;

/// Build every triangle for one frame, back to front
pub fn build_frame(snapshot: &FrameSnapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    vertices.extend(shapes::arena_frame(&snapshot.arena, colors::ARENA_WALL));

    let player = &snapshot.player;
    vertices.extend(shapes::circle(player.pos, player.radius, colors::PLAYER, BODY_SEGMENTS));
    vertices.extend(shapes::gun(player, colors::GUN));

    let target = &snapshot.target;
    vertices.extend(shapes::circle(target.pos, target.radius, colors::TARGET, BODY_SEGMENTS));
    vertices.extend(shapes::compass_arrow(player, snapshot.angle_to_target, colors::COMPASS));

    for projectile in &snapshot.projectiles {
        vertices.extend(shapes::tracer(projectile, TRACER_WIDTH, colors::TRACER));
        vertices.extend(shapes::circle(
            projectile.pos,
            projectile.radius,
            colors::PROJECTILE,
            PROJECTILE_SEGMENTS,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::sim::Arena;
    use crate::{Game, Tuning};
    use glam::Vec2;

    fn game() -> Game<ManualClock> {
        let arena = Arena::new(1000.0, 800.0, 20.0).expect("valid arena");
        let tuning = Tuning {
            headshot_chance: 0.0,
            ..Default::default()
        };
        Game::new(ManualClock::new(0.0), arena, tuning, 11).expect("valid game")
    }

    #[test]
    fn test_projectiles_add_geometry() {
        let mut g = game();
        g.state_mut().target.pos = Vec2::new(500.0, 100.0);
        g.state_mut().target.speed = 0.0;
        let idle = build_frame(&g.frame());

        g.input_mut().set_aim_angle(std::f32::consts::PI);
        g.input_mut().request_fire();
        g.clock().advance(16.0);
        let snap = g.frame();
        assert_eq!(snap.projectiles.len(), 1);

        let firing = build_frame(&snap);
        let per_projectile = 6 + PROJECTILE_SEGMENTS as usize * 3;
        assert_eq!(firing.len(), idle.len() + per_projectile);
    }

    #[test]
    fn test_hud_text() {
        let mut g = game();
        g.state_mut().target.pos = Vec2::new(700.0, 400.0);
        g.state_mut().target.speed = 0.0;
        g.input_mut().set_aim_angle(0.0);
        g.input_mut().request_fire();
        let snap = g.frame();

        let lines = hud_lines(&snap);
        assert_eq!(lines[0], "Score: 0");
        assert_eq!(lines[1], "Overall Accuracy: 100.00%");
        assert_eq!(lines[2], "Accuracy (Last 5): 100.00%");

        let labels = damage_labels(&snap);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "-50");
        assert_eq!(labels[0].color, colors::DAMAGE);
    }

    #[test]
    fn test_hud_text_before_any_shot() {
        let mut g = game();
        let lines = hud_lines(&g.frame());
        assert_eq!(lines[1], "Overall Accuracy: 0.00%");
        assert_eq!(lines[2], "Accuracy (Last 5): 0.00%");
    }
}
