//! Population maintenance and difficulty ramp
//!
//! Difficulty climbs by one level every `difficulty_interval` active ticks.
//! Whenever the field runs low and the spawn cooldown has elapsed, a fresh
//! batch of full-size asteroids arrives, faster at higher levels.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::Asteroid;
use super::rng::RandomSource;
use crate::settings::Settings;

/// What one spawner step changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// New difficulty level, if it went up this tick
    pub difficulty_raised: Option<u32>,
    /// Asteroids added this tick
    pub spawned: u32,
}

/// Spawn cooldown, difficulty level and active tick counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks until another batch may spawn
    pub spawn_cooldown: u32,
    /// Starts at 1, never decreases
    pub difficulty_level: u32,
    /// Active (unpaused) ticks since the game started
    pub frames: u64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            spawn_cooldown: 0,
            difficulty_level: 1,
            frames: 0,
        }
    }
}

impl Spawner {
    /// Speed multiplier for asteroids created right now
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.difficulty_level as f32
    }

    /// Advance one active tick.
    ///
    /// The cooldown is ticked down before the population check, so a batch
    /// spawned this tick leaves the cooldown at exactly `spawn_cooldown`.
    pub fn step(
        &mut self,
        asteroids: &mut Vec<Asteroid>,
        arena: &Arena,
        settings: &Settings,
        rng: &mut impl RandomSource,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();

        self.frames += 1;
        if self.frames.is_multiple_of(settings.difficulty_interval) {
            self.difficulty_level += 1;
            report.difficulty_raised = Some(self.difficulty_level);
            log::info!(
                "Difficulty raised to {} after {} ticks",
                self.difficulty_level,
                self.frames
            );
        }

        self.spawn_cooldown = self.spawn_cooldown.saturating_sub(1);

        if asteroids.len() < settings.spawn_threshold && self.spawn_cooldown == 0 {
            let count = settings.spawn_base_count + self.difficulty_level;
            let multiplier = self.speed_multiplier();
            asteroids.extend(
                (0..count).map(|_| Asteroid::spawn_anywhere(arena, multiplier, settings, rng)),
            );
            self.spawn_cooldown = settings.spawn_cooldown;
            report.spawned = count;
            log::info!(
                "Spawned {} asteroids at speed x{} ({} alive)",
                count,
                multiplier,
                asteroids.len()
            );
        }

        report
    }
}
