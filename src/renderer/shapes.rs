//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in arena pixel space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::direction;
use crate::sim::{Arena, PlayerView, ProjectileView};

/// Push a quad given its four corners in winding order
fn quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
    vertices.push(Vertex::new(a.x, a.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Thick line segment from `a` to `b`
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(&mut vertices, a + perp, b + perp, b - perp, a - perp, color);
    vertices
}

/// Wall frame around the arena interior
pub fn arena_frame(arena: &Arena, color: [f32; 4]) -> Vec<Vertex> {
    let (w, h, b) = (arena.width, arena.height, arena.border);
    let mut vertices = Vec::with_capacity(24);

    // Top, bottom, left, right
    quad(&mut vertices, Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), Vec2::new(w, b), Vec2::new(0.0, b), color);
    quad(&mut vertices, Vec2::new(0.0, h - b), Vec2::new(w, h - b), Vec2::new(w, h), Vec2::new(0.0, h), color);
    quad(&mut vertices, Vec2::new(0.0, b), Vec2::new(b, b), Vec2::new(b, h - b), Vec2::new(0.0, h - b), color);
    quad(&mut vertices, Vec2::new(w - b, b), Vec2::new(w, b), Vec2::new(w, h - b), Vec2::new(w - b, h - b), color);

    vertices
}

/// Gun barrel sticking out of the player along the aim angle, with a
/// rounded muzzle
pub fn gun(player: &PlayerView, color: [f32; 4]) -> Vec<Vertex> {
    let dir = direction(player.aim_angle);
    let start = player.pos + dir * player.radius;
    let end = player.pos + dir * (player.radius + player.gun_length);

    let mut vertices = line(start, end, player.gun_width, color);
    vertices.extend(circle(end, player.gun_width / 2.0, color, 8));
    vertices
}

/// Arrow just outside the player pointing at the target
pub fn compass_arrow(player: &PlayerView, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = direction(angle);
    let perp = Vec2::new(-dir.y, dir.x);
    let tail = player.pos + dir * (player.radius + 10.0);
    let tip = player.pos + dir * (player.radius + 30.0);
    let barb = player.pos + dir * (player.radius + 25.0);

    let mut vertices = line(tail, tip, 3.0, color);
    vertices.extend(line(tip, barb + perp * 5.0, 3.0, color));
    vertices.extend(line(tip, barb - perp * 5.0, 3.0, color));
    vertices
}

/// Tracer line from the projectile's tail to its head
pub fn tracer(projectile: &ProjectileView, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    line(projectile.tracer_tail, projectile.pos, width, color)
}
