//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded or injected randomness only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod demo;
pub mod entity;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use arena::{Arena, circles_overlap, distance, wrap};
pub use collision::{CollisionReport, Kill, collides, resolve_collisions};
pub use demo::demo_input;
pub use entity::{Asteroid, AsteroidTier, Body, Bullet, Ship};
pub use rng::RandomSource;
pub use spawner::{SpawnReport, Spawner};
pub use state::{GameEvent, GamePhase, GameState, WorldSnapshot};
pub use tick::{TickInput, TickOutcome, tick};
