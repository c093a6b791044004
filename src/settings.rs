//! Simulation tuning
//!
//! Every gameplay constant can be overridden from a JSON file. Missing keys
//! fall back to the values in `consts`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "malformed settings JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ship ===
    pub ship_radius: f32,
    /// Radians per tick per held turn key
    pub ship_turn_step: f32,
    /// Velocity gained per tick of thrust
    pub ship_thrust: f32,
    /// Ticks between shots
    pub ship_shoot_cooldown: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_life: u32,

    // === Asteroids ===
    /// Size (and radius) of a freshly spawned asteroid
    pub asteroid_size: f32,
    /// Per-axis speed bound before the difficulty multiplier
    pub asteroid_max_speed: f32,
    /// Asteroids larger than this split on destruction
    pub fragment_threshold: f32,

    // === Spawner / difficulty ===
    pub initial_asteroids: u32,
    pub spawn_threshold: usize,
    pub spawn_base_count: u32,
    pub spawn_cooldown: u32,
    pub difficulty_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ship_radius: SHIP_RADIUS,
            ship_turn_step: SHIP_TURN_STEP,
            ship_thrust: SHIP_THRUST,
            ship_shoot_cooldown: SHIP_SHOOT_COOLDOWN,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_life: BULLET_LIFE,

            asteroid_size: ASTEROID_SIZE,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            fragment_threshold: FRAGMENT_THRESHOLD,

            initial_asteroids: INITIAL_ASTEROIDS,
            spawn_threshold: SPAWN_THRESHOLD,
            spawn_base_count: SPAWN_BASE_COUNT,
            spawn_cooldown: SPAWN_COOLDOWN,
            difficulty_interval: DIFFICULTY_INTERVAL,
        }
    }
}

impl Settings {
    /// Arena bounds described by these settings
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(value: f32, field: &'static str) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }
        fn non_negative(value: f32, field: &'static str) -> Result<(), SettingsError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                })
            }
        }

        positive(self.arena_width, "arena_width")?;
        positive(self.arena_height, "arena_height")?;
        positive(self.ship_radius, "ship_radius")?;
        positive(self.bullet_radius, "bullet_radius")?;
        positive(self.bullet_speed, "bullet_speed")?;
        positive(self.asteroid_size, "asteroid_size")?;
        // At or below zero every asteroid would split forever
        positive(self.fragment_threshold, "fragment_threshold")?;

        non_negative(self.ship_thrust, "ship_thrust")?;
        non_negative(self.ship_turn_step, "ship_turn_step")?;
        non_negative(self.asteroid_max_speed, "asteroid_max_speed")?;

        if self.bullet_life == 0 {
            return Err(SettingsError::Invalid {
                field: "bullet_life",
                reason: "bullets must live at least one tick",
            });
        }
        if self.difficulty_interval == 0 {
            return Err(SettingsError::Invalid {
                field: "difficulty_interval",
                reason: "must be at least one tick",
            });
        }
        Ok(())
    }
}
