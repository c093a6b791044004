//! Fixed-step simulation tick
//!
//! Core game loop that advances the world deterministically. The order of
//! the steps inside a running tick is fixed:
//! ship → fire → purge → bullets → asteroids → collisions → spawner.

use super::collision::resolve_collisions;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Fire whenever the cooldown allows (held = auto-fire)
    pub fire: bool,
    /// Pause toggle (edge-triggered by the host)
    pub toggle_pause: bool,
}

/// Result of one tick. `GameOver` must stop the driver until a reset.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The world advanced one step
    Advanced,
    /// Paused: nothing changed
    Paused,
    /// The ship is (or already was) destroyed
    GameOver,
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    // Events only ever describe the latest tick
    state.events.clear();

    // Handle pause toggle
    if input.toggle_pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                log::info!("Paused at frame {}", state.spawner.frames);
                return TickOutcome::Paused;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.events.push(GameEvent::Resumed);
                log::info!("Resumed at frame {}", state.spawner.frames);
            }
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return TickOutcome::Paused,
        GamePhase::GameOver => return TickOutcome::GameOver,
        GamePhase::Running => {}
    }

    let arena = state.arena;

    // --- Ship ---
    state.ship.update(input, &arena, &state.settings);
    if input.fire {
        if let Some(bullet) = state.ship.try_shoot(&state.settings) {
            log::debug!(
                "Shot fired from ({:.1}, {:.1}) heading {:.2}",
                bullet.pos.x,
                bullet.pos.y,
                state.ship.angle
            );
            state.bullets.push(bullet);
            state.events.push(GameEvent::ShotFired);
        }
    }

    // --- Bullets ---
    state.bullets.retain(|b| !b.is_expired());
    for bullet in &mut state.bullets {
        bullet.update(&arena);
    }
    // A bullet leaves the live set the tick its life runs out
    state.bullets.retain(|b| !b.is_expired());

    // --- Asteroids ---
    for asteroid in &mut state.asteroids {
        asteroid.update(&arena);
    }

    // --- Collisions ---
    let report = resolve_collisions(
        &state.ship,
        &mut state.bullets,
        &mut state.asteroids,
        state.spawner.speed_multiplier(),
        &state.settings,
        &mut state.rng,
    );
    state.events.extend(report.kills.iter().map(|kill| GameEvent::AsteroidDestroyed {
        size: kill.size,
        fragments: kill.fragments,
    }));

    if report.ship_hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ShipDestroyed);
        log::info!(
            "Game over at frame {} (difficulty {})",
            state.spawner.frames,
            state.spawner.difficulty_level
        );
        return TickOutcome::GameOver;
    }

    // --- Spawner / difficulty ---
    let spawn = state.spawner.step(
        &mut state.asteroids,
        &arena,
        &state.settings,
        &mut state.rng,
    );
    if let Some(level) = spawn.difficulty_raised {
        state.events.push(GameEvent::DifficultyRaised { level });
    }
    if spawn.spawned > 0 {
        state.events.push(GameEvent::AsteroidsSpawned {
            count: spawn.spawned,
            multiplier: state.spawner.speed_multiplier(),
        });
    }

    TickOutcome::Advanced
}
