//! HUD text and floating damage labels
//!
//! Text layout and fonts belong to the host; this only decides what to say
//! and where.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::FrameSnapshot;

/// Top-left HUD lines, in draw order
pub fn hud_lines(snapshot: &FrameSnapshot) -> [String; 3] {
    [
        format!("Score: {}", snapshot.score),
        format!("Overall Accuracy: {:.2}%", snapshot.lifetime_accuracy),
        format!("Accuracy (Last 5): {:.2}%", snapshot.recent_accuracy),
    ]
}

/// A floating "-50" over the target
#[derive(Debug, Clone, PartialEq)]
pub struct DamageLabel {
    pub text: String,
    pub pos: Vec2,
    /// Headshots are red, body shots blue; alpha carries the fade
    pub color: [f32; 4],
}

pub fn damage_labels(snapshot: &FrameSnapshot) -> Vec<DamageLabel> {
    snapshot
        .damage_numbers
        .iter()
        .map(|d| {
            let mut color = if d.critical {
                colors::DAMAGE_HEADSHOT
            } else {
                colors::DAMAGE
            };
            color[3] = d.opacity;
            DamageLabel {
                text: format!("-{}", d.amount),
                pos: d.pos,
                color,
            }
        })
        .collect()
}
