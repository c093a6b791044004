//! Drift Rocks - A toroidal-arena asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 10.0;
    /// Heading change per tick while a turn key is held (radians)
    pub const SHIP_TURN_STEP: f32 = 0.05;
    /// Velocity added per tick of thrust
    pub const SHIP_THRUST: f32 = 0.1;
    /// Ticks between shots
    pub const SHIP_SHOOT_COOLDOWN: u32 = 10;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 5.0;
    pub const BULLET_RADIUS: f32 = 2.0;
    pub const BULLET_LIFE: u32 = 60;

    /// Asteroid defaults
    pub const ASTEROID_SIZE: f32 = 40.0;
    /// Max per-axis speed at multiplier 1
    pub const ASTEROID_MAX_SPEED: f32 = 1.5;
    /// Asteroids larger than this split in two when destroyed
    pub const FRAGMENT_THRESHOLD: f32 = 20.0;

    /// Population at game start
    pub const INITIAL_ASTEROIDS: u32 = 5;
    /// Replenish when fewer than this many asteroids are alive
    pub const SPAWN_THRESHOLD: usize = 3;
    /// Replenishment batch is this plus the difficulty level
    pub const SPAWN_BASE_COUNT: u32 = 4;
    /// Ticks between replenishment batches
    pub const SPAWN_COOLDOWN: u32 = 120;
    /// Active ticks per difficulty level (10 seconds at 60 Hz)
    pub const DIFFICULTY_INTERVAL: u64 = 600;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Unit vector pointing along `angle` (radians, 0 = +x, clockwise in screen space)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
