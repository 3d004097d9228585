//! Game balance and play-field configuration
//!
//! One immutable struct handed to the world at construction. Loaded from JSON
//! when the runner is given a path; every field falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play-field width in pixels
    pub width: f32,
    /// Play-field height in pixels
    pub height: f32,

    // === Player ===
    pub player_speed: f32,
    /// Horizontal margin kept between the player center and the side edges
    pub player_radius: f32,
    pub start_lives: u32,
    /// Seconds between sword swings
    pub attack_cooldown: f32,
    /// Grace period after losing a life
    pub invulnerability_duration: f32,
    /// How long the finishing-move pose is held
    pub kill_pose_duration: f32,

    // === Enemies ===
    pub enemy_speed: f32,
    pub enemy_hit_points: i32,
    pub enemy_attack_range: f32,
    pub enemy_attack_cooldown: f32,
    /// Score awarded per kill
    pub kill_reward: u64,

    // === Waves ===
    pub wave_duration: f32,
    pub base_spawn_interval: f32,
    pub min_spawn_interval: f32,
    /// Multiplier applied to the spawn interval each wave (0 < f <= 1)
    pub spawn_interval_factor: f32,
    pub base_max_enemies: u32,
    pub enemy_cap_increment: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            player_speed: 220.0,
            player_radius: 20.0,
            start_lives: 3,
            attack_cooldown: 0.4,
            invulnerability_duration: 2.0,
            kill_pose_duration: 2.0,

            enemy_speed: 90.0,
            enemy_hit_points: 1,
            enemy_attack_range: 40.0,
            enemy_attack_cooldown: 1.0,
            kill_reward: 100,

            wave_duration: 30.0,
            base_spawn_interval: 2.0,
            min_spawn_interval: 0.5,
            spawn_interval_factor: 0.9,
            base_max_enemies: 5,
            enemy_cap_increment: 2,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("player_speed", self.player_speed)?;
        positive("enemy_speed", self.enemy_speed)?;
        positive("wave_duration", self.wave_duration)?;
        positive("base_spawn_interval", self.base_spawn_interval)?;
        positive("min_spawn_interval", self.min_spawn_interval)?;
        positive("attack_cooldown", self.attack_cooldown)?;
        positive("invulnerability_duration", self.invulnerability_duration)?;

        if self.player_radius < 0.0 || self.player_radius * 2.0 >= self.width {
            return Err(TuningError::Invalid {
                field: "player_radius",
                reason: "must fit inside the play-field width",
            });
        }
        if !(self.spawn_interval_factor > 0.0 && self.spawn_interval_factor <= 1.0) {
            return Err(TuningError::Invalid {
                field: "spawn_interval_factor",
                reason: "must be in (0, 1]",
            });
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval",
                reason: "must not exceed base_spawn_interval",
            });
        }
        if self.start_lives == 0 {
            return Err(TuningError::Invalid {
                field: "start_lives",
                reason: "must be at least 1",
            });
        }
        if self.enemy_hit_points <= 0 {
            return Err(TuningError::Invalid {
                field: "enemy_hit_points",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
