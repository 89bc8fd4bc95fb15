//! Walled rectangular play area
//!
//! The legal interior is `[border, width - border] x [border, height - border]`.
//! Circular bodies are kept fully inside it; points (projectiles) are tested
//! against it directly.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border: f32,
}

/// Which walls a clamp pushed a body back from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    /// Number of walls touched, in the order they were resolved
    pub fn count(&self) -> usize {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .filter(|&&hit| hit)
            .count()
    }
}

impl Arena {
    pub fn new(width: f32, height: f32, border: f32) -> Result<Self, ConfigError> {
        let valid = width.is_finite()
            && height.is_finite()
            && border.is_finite()
            && border >= 0.0
            && width - 2.0 * border > 0.0
            && height - 2.0 * border > 0.0;
        if !valid {
            return Err(ConfigError::InvalidArena {
                width,
                height,
                border,
            });
        }
        Ok(Self {
            width,
            height,
            border,
        })
    }

    /// Arena sized to a host viewport with the default wall thickness
    pub fn from_viewport(width: f32, height: f32) -> Result<Self, ConfigError> {
        Self::new(width, height, crate::consts::ARENA_BORDER)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn interior_min(&self) -> Vec2 {
        Vec2::splat(self.border)
    }

    #[inline]
    pub fn interior_max(&self) -> Vec2 {
        Vec2::new(self.width - self.border, self.height - self.border)
    }

    pub fn interior_size(&self) -> Vec2 {
        self.interior_max() - self.interior_min()
    }

    /// Whether a circle of `radius` can sit inside the interior at all
    pub fn fits(&self, radius: f32) -> bool {
        let size = self.interior_size();
        size.x >= 2.0 * radius && size.y >= 2.0 * radius
    }

    /// Point test against the interior (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.interior_min();
        let max = self.interior_max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Clamp a circle so it lies fully inside the interior
    ///
    /// Each axis is handled independently: low wall first, then high wall.
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> (Vec2, WallContact) {
        let min = self.interior_min() + Vec2::splat(radius);
        let max = self.interior_max() - Vec2::splat(radius);
        let mut out = pos;
        let mut contact = WallContact::default();

        if out.x < min.x {
            out.x = min.x;
            contact.left = true;
        }
        if out.x > max.x {
            out.x = max.x;
            contact.right = true;
        }
        if out.y < min.y {
            out.y = min.y;
            contact.top = true;
        }
        if out.y > max.y {
            out.y = max.y;
            contact.bottom = true;
        }

        (out, contact)
    }

    /// Uniform random point in the interior
    pub fn random_interior_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let size = self.interior_size();
        self.interior_min() + Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y)
    }
}
