//! Idle/demo mode: a simple autopilot that plays the game
//!
//! Turns toward the nearest asteroid, fires when lined up and nudges
//! forward when the field is far away. Reads the state, never mutates it.

use super::arena::distance;
use super::state::GameState;
use super::tick::TickInput;
use crate::normalize_angle;

/// Aim tolerance (radians) within which the autopilot fires
const FIRE_CONE: f32 = 0.15;
/// Only thrust toward targets farther than this
const APPROACH_DISTANCE: f32 = 250.0;
/// Don't build up speed beyond this
const CRUISE_SPEED: f32 = 1.5;

/// Input the autopilot would give for the current state
pub fn demo_input(state: &GameState) -> TickInput {
    let ship = &state.ship;

    let Some(target) = state.asteroids.iter().min_by(|a, b| {
        distance(ship.pos, a.pos)
            .partial_cmp(&distance(ship.pos, b.pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return TickInput::default();
    };

    let to_target = target.pos - ship.pos;
    let desired = to_target.y.atan2(to_target.x);
    let delta = normalize_angle(desired - ship.angle);
    let half_step = state.settings.ship_turn_step / 2.0;

    TickInput {
        turn_left: delta < -half_step,
        turn_right: delta > half_step,
        thrust: to_target.length() > APPROACH_DISTANCE
            && delta.abs() < FIRE_CONE
            && ship.vel.length() < CRUISE_SPEED,
        fire: delta.abs() < FIRE_CONE,
        toggle_pause: false,
    }
}
