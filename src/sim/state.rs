//! Game state and core simulation types
//!
//! The whole world lives in one `GameState` value owned by the tick loop.
//! Collaborators read it (or a `WorldSnapshot`) between ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::{Asteroid, Bullet, Ship};
use super::spawner::Spawner;
use crate::settings::Settings;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen: nothing moves, nothing spawns
    Paused,
    /// Ship destroyed. Terminal until `GameState::reset`.
    GameOver,
}

/// Notable things that happened during a tick, for renderer/audio hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    AsteroidDestroyed { size: f32, fragments: usize },
    AsteroidsSpawned { count: u32, multiplier: f32 },
    DifficultyRaised { level: u32 },
    ShipDestroyed,
    Paused,
    Resumed,
}

/// Read-only view of the world handed to rendering after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub difficulty_level: u32,
    pub phase: GamePhase,
    pub frames: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tuning this run was started with
    pub settings: Settings,
    pub arena: Arena,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Live asteroids; fragments are appended at the end
    pub asteroids: Vec<Asteroid>,
    /// Spawn cooldown, difficulty and active tick counter
    pub spawner: Spawner,
    /// Events from the latest tick only; cleared when the next tick starts
    pub events: Vec<GameEvent>,
    /// RNG driving spawn positions and asteroid velocities
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given tuning and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let arena = settings.arena();
        let mut state = Self {
            seed,
            ship: Ship::new(&arena, &settings),
            settings,
            arena,
            phase: GamePhase::Running,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            spawner: Spawner::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_initial_asteroids();
        log::info!("New game (seed {seed}), {} asteroids", state.asteroids.len());
        state
    }

    /// Rebuild the world from scratch: centered ship, no bullets, a fresh
    /// starting population, difficulty 1 and zeroed counters.
    ///
    /// The RNG keeps running, so each reset deals a different opening field.
    pub fn reset(&mut self) {
        self.ship = Ship::new(&self.arena, &self.settings);
        self.bullets.clear();
        self.asteroids.clear();
        self.spawner = Spawner::default();
        self.events.clear();
        self.phase = GamePhase::Running;
        self.spawn_initial_asteroids();
        log::info!("Game reset, {} asteroids", self.asteroids.len());
    }

    fn spawn_initial_asteroids(&mut self) {
        let multiplier = self.spawner.speed_multiplier();
        for _ in 0..self.settings.initial_asteroids {
            let asteroid =
                Asteroid::spawn_anywhere(&self.arena, multiplier, &self.settings, &mut self.rng);
            self.asteroids.push(asteroid);
        }
    }

    #[inline]
    pub fn difficulty_level(&self) -> u32 {
        self.spawner.difficulty_level
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Copy out what the renderer needs
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            ship: self.ship.clone(),
            bullets: self.bullets.clone(),
            asteroids: self.asteroids.clone(),
            difficulty_level: self.spawner.difficulty_level,
            phase: self.phase,
            frames: self.spawner.frames,
        }
    }

    /// Take the latest tick's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::AsteroidTier;
    use glam::Vec2;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(Settings::default(), 12345);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ship.pos, Vec2::new(400.0, 300.0));
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 5);
        assert_eq!(state.difficulty_level(), 1);
        assert_eq!(state.spawner.frames, 0);
        for a in &state.asteroids {
            assert_eq!(a.size, 40.0);
            assert_eq!(a.tier, AsteroidTier::Full);
            assert_eq!(a.speed_multiplier, 1.0);
            assert!(a.vel.x.abs() <= 1.5 && a.vel.y.abs() <= 1.5);
            assert!(state.arena.contains(a.pos));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(Settings::default(), 7);
        let b = GameState::new(Settings::default(), 7);
        assert_eq!(a.asteroids, b.asteroids);

        let c = GameState::new(Settings::default(), 8);
        assert_ne!(a.asteroids, c.asteroids);
    }

    #[test]
    fn test_reset_restores_start_configuration() {
        let mut state = GameState::new(Settings::default(), 99);
        state.phase = GamePhase::GameOver;
        state.ship.pos = Vec2::new(10.0, 10.0);
        state.ship.shoot_cooldown = 4;
        state.spawner.difficulty_level = 6;
        state.spawner.frames = 3000;
        state.spawner.spawn_cooldown = 77;
        state.asteroids.truncate(1);
        state.events.push(GameEvent::ShipDestroyed);

        state.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ship.shoot_cooldown, 0);
        assert_eq!(state.spawner, Spawner::default());
        assert_eq!(state.asteroids.len(), 5);
        assert!(state.asteroids.iter().all(|a| a.speed_multiplier == 1.0));
        assert!(state.bullets.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(Settings::default(), 5);
        state.spawner.difficulty_level = 3;
        let snap = state.snapshot();
        assert_eq!(snap.difficulty_level, 3);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.asteroids, state.asteroids);
        assert_eq!(snap.ship, state.ship);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(Settings::default(), 2024);
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.asteroids, state.asteroids);
        assert_eq!(restored.seed, 2024);
        assert_eq!(restored.phase, GamePhase::Running);
    }
}
