//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Time comes in as a parameter, never from the wall clock
//! - Seeded RNG only
//! - Stable iteration order (projectiles in spawn order)

pub mod arena;
pub mod combat;
pub mod effects;
pub mod input;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod target;
pub mod tick;

pub use arena::{Arena, WallContact};
pub use combat::{CombatResolver, HitReport, roll_damage};
pub use effects::{DamageEvent, EffectsTracker, fade_opacity};
pub use input::{Aim, FireControl, HeldKeys, InputState, MoveDirection, TickInput};
pub use player::Player;
pub use projectiles::{MissReason, Projectile, ProjectileFate, ProjectileSet};
pub use snapshot::{DamageNumberView, FrameSnapshot, PlayerView, ProjectileView, TargetView};
pub use state::{GameEvent, SimulationState};
pub use stats::{StatsTracker, accuracy};
pub use target::Target;
pub use tick::{step, try_fire};
