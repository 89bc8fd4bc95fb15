//! Gameplay tuning
//!
//! Every balance value the simulation reads. Loaded from JSON when the host
//! provides one; missing fields fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    pub gun_length: f32,
    pub gun_width: f32,
    /// Pixels per frame along each held axis
    pub move_speed: f32,
    /// Minimum time between shots
    pub fire_cooldown_ms: f64,

    // === Projectiles ===
    /// Pixels per frame
    pub projectile_speed: f32,
    /// Distance a projectile may travel before it counts as a miss
    pub projectile_range: f32,
    pub projectile_radius: f32,
    pub tracer_length: f32,

    // === Target ===
    pub target_radius: f32,
    pub target_start_speed: f32,
    pub target_speed_increment: f32,
    pub target_max_hp: i32,
    /// Radians per second
    pub dodge_speed: f32,
    pub dodge_threshold: f32,

    // === Combat ===
    pub base_damage: i32,
    pub headshot_damage: i32,
    /// Probability in [0, 1]
    pub headshot_chance: f64,

    // === Effects / stats ===
    pub damage_number_duration_ms: f64,
    pub recent_shot_window: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            gun_length: GUN_LENGTH,
            gun_width: GUN_WIDTH,
            move_speed: PLAYER_MOVE_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_range: PROJECTILE_RANGE,
            projectile_radius: PROJECTILE_RADIUS,
            tracer_length: TRACER_LENGTH,

            target_radius: TARGET_RADIUS,
            target_start_speed: TARGET_START_SPEED,
            target_speed_increment: TARGET_SPEED_INCREMENT,
            target_max_hp: TARGET_MAX_HP,
            dodge_speed: DODGE_SPEED,
            dodge_threshold: DODGE_THRESHOLD,

            base_damage: BASE_DAMAGE,
            headshot_damage: HEADSHOT_DAMAGE,
            headshot_chance: HEADSHOT_CHANCE,

            damage_number_duration_ms: DAMAGE_NUMBER_DURATION_MS,
            recent_shot_window: RECENT_SHOT_WINDOW,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is in a range the simulation can handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidTuning {
                    field,
                    reason: "must be a positive number",
                })
            }
        }
        fn non_negative(field: &'static str, v: f64) -> Result<(), ConfigError> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidTuning {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive("player_radius", self.player_radius)?;
        non_negative("gun_length", self.gun_length as f64)?;
        non_negative("gun_width", self.gun_width as f64)?;
        non_negative("move_speed", self.move_speed as f64)?;
        non_negative("fire_cooldown_ms", self.fire_cooldown_ms)?;

        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_range", self.projectile_range)?;
        non_negative("projectile_radius", self.projectile_radius as f64)?;
        non_negative("tracer_length", self.tracer_length as f64)?;

        positive("target_radius", self.target_radius)?;
        non_negative("target_start_speed", self.target_start_speed as f64)?;
        non_negative("target_speed_increment", self.target_speed_increment as f64)?;
        non_negative("dodge_speed", self.dodge_speed as f64)?;
        if !(0.0..=1.0).contains(&self.dodge_threshold) {
            return Err(ConfigError::InvalidTuning {
                field: "dodge_threshold",
                reason: "must be within [0, 1]",
            });
        }

        if self.target_max_hp <= 0 {
            return Err(ConfigError::InvalidTuning {
                field: "target_max_hp",
                reason: "must be a positive number",
            });
        }
        if self.base_damage <= 0 || self.headshot_damage <= 0 {
            return Err(ConfigError::InvalidTuning {
                field: "base_damage",
                reason: "damage values must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.headshot_chance) {
            return Err(ConfigError::InvalidTuning {
                field: "headshot_chance",
                reason: "must be a probability within [0, 1]",
            });
        }

        positive(
            "damage_number_duration_ms",
            self.damage_number_duration_ms as f32,
        )?;
        if self.recent_shot_window == 0 {
            return Err(ConfigError::InvalidTuning {
                field: "recent_shot_window",
                reason: "must hold at least one shot",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.base_damage, 50);
        assert_eq!(tuning.headshot_damage, 150);
        assert_eq!(tuning.recent_shot_window, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "headshot_chance": 1.0, "move_speed": 8.0 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.headshot_chance, 1.0);
        assert_eq!(tuning.move_speed, 8.0);
        assert_eq!(tuning.projectile_speed, PROJECTILE_SPEED);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "headshot_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTuning {
                field: "headshot_chance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_window() {
        let tuning = Tuning {
            recent_shot_window: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let tuning = Tuning {
            dodge_speed: 4.0,
            ..Default::default()
        };
        let json = tuning.to_json().expect("serializable");
        let back = Tuning::from_json(&json).expect("valid");
        assert_eq!(back.dodge_speed, 4.0);
    }
}
