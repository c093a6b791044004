//! Drift Rocks headless runner
//!
//! Plays the game with the demo autopilot and prints the final world as JSON.
//!
//! Usage: `drift-rocks [settings.json] [ticks] [seed]`
//! Use `-` for the settings path to keep the defaults. Set `RUST_LOG=debug`
//! to see every shot and kill.

use std::time::{SystemTime, UNIX_EPOCH};

use drift_rocks::Settings;
use drift_rocks::sim::{GameEvent, GameState, TickOutcome, demo_input, tick};

/// Ticks to simulate when none are given (one minute at 60 Hz)
const DEFAULT_TICKS: u64 = 3600;
/// Games started after the first before the runner gives up
const MAX_RESETS: u32 = 3;
/// Progress log interval in ticks
const REPORT_INTERVAL: u64 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next().as_deref() {
        None | Some("-") => Settings::default(),
        Some(path) => Settings::load(path)?,
    };
    let ticks = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0),
    };

    log::info!("Drift Rocks (headless) starting: {ticks} ticks, seed {seed}");

    let mut state = GameState::new(settings, seed);
    let mut resets = 0;
    let mut kills = 0u64;
    let mut shots = 0u64;

    for n in 1..=ticks {
        let input = demo_input(&state);
        let outcome = tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::ShotFired => shots += 1,
                GameEvent::AsteroidDestroyed { .. } => kills += 1,
                _ => {}
            }
        }

        if n % REPORT_INTERVAL == 0 {
            log::info!(
                "tick {n}: difficulty {}, {} asteroids, {} bullets, {shots} shots, {kills} kills",
                state.difficulty_level(),
                state.asteroids.len(),
                state.bullets.len(),
            );
        }

        if outcome == TickOutcome::GameOver {
            if resets >= MAX_RESETS {
                log::info!("Game over at tick {n}, no resets left");
                break;
            }
            resets += 1;
            log::info!("Game over at tick {n}, reset {resets}/{MAX_RESETS}");
            state.reset();
        }
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}
