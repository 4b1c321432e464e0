//! Game configuration loaded from `~/.potty-run/config.json`.
//!
//! Every field has a default equal to the matching constant in
//! [`crate::core::constants`], so a partial JSON file only overrides the
//! values it names.

use super::constants::*;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File name of the optional config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// All gameplay tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    /// Distance from the bottom edge of the surface to the ground line.
    pub ground_offset: f64,

    pub player_width: f64,
    pub player_height: f64,
    pub player_x: f64,

    pub jump_velocity: f64,
    pub gravity: f64,

    pub base_speed: f64,
    pub speed_step: f64,
    pub speed_step_interval_seconds: u64,

    pub obstacle_min_size: u32,
    pub obstacle_max_size: u32,
    pub pair_overlap: f64,
    pub double_chance: f64,
    pub triple_chance: f64,
    pub triple_min_score: u32,
    pub spawn_gap: f64,

    pub hitbox_margin: f64,

    pub tick_rate_hz: u32,
    pub monthly_salary: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            ground_offset: GROUND_OFFSET,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_x: PLAYER_X,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_step_interval_seconds: SPEED_STEP_INTERVAL_SECONDS,
            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            pair_overlap: PAIR_OVERLAP,
            double_chance: DOUBLE_CHANCE,
            triple_chance: TRIPLE_CHANCE,
            triple_min_score: TRIPLE_MIN_SCORE,
            spawn_gap: SPAWN_GAP,
            hitbox_margin: HITBOX_MARGIN,
            tick_rate_hz: TICK_RATE_HZ,
            monthly_salary: DEFAULT_MONTHLY_SALARY,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line.
    pub fn ground_y(&self) -> f64 {
        self.surface_height - self.ground_offset
    }

    /// Player `y` when standing on the ground.
    pub fn resting_y(&self) -> f64 {
        self.ground_y() - self.player_height
    }

    /// Duration of a single fixed physics step.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, the default file in the
    /// data directory is used when present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match persistence::data_path(CONFIG_FILE_NAME) {
                Ok(default_path) if default_path.exists() => Self::from_file(&default_path)?,
                _ => {
                    log::debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        for (field, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("base_speed", self.base_speed),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be positive, got {}", value)));
            }
        }
        if self.jump_velocity >= 0.0 {
            return Err(invalid("jump_velocity", "must be negative (upward)"));
        }
        if self.speed_step < 0.0 {
            return Err(invalid("speed_step", "must not be negative"));
        }
        if self.speed_step_interval_seconds == 0 {
            return Err(invalid("speed_step_interval_seconds", "must be at least 1"));
        }
        if self.ground_offset < 0.0 || self.ground_offset >= self.surface_height {
            return Err(invalid("ground_offset", "ground line must lie on the surface"));
        }
        if self.obstacle_min_size == 0 || self.obstacle_min_size > self.obstacle_max_size {
            return Err(invalid(
                "obstacle_min_size",
                format!(
                    "size range {}..={} is empty",
                    self.obstacle_min_size, self.obstacle_max_size
                ),
            ));
        }
        for (field, chance) in [
            ("double_chance", self.double_chance),
            ("triple_chance", self.triple_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(invalid(field, "probability must be within 0..=1"));
            }
        }
        if self.tick_rate_hz == 0 {
            return Err(invalid("tick_rate_hz", "must be at least 1"));
        }
        Ok(())
    }
}
