//! Ship, bullet and asteroid models
//!
//! Every entity is a circle moving on the torus. The shared `Body` trait
//! exposes what the collision pass needs; each type owns its own per-tick
//! transition on top of that.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::rng::RandomSource;
use super::tick::TickInput;
use crate::heading_vector;
use crate::settings::Settings;

/// A movable, wrappable, collidable circle
pub trait Body {
    fn pos(&self) -> Vec2;
    fn vel(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn set_pos(&mut self, pos: Vec2);

    /// Integrate one tick of velocity and wrap onto the arena
    fn drift(&mut self, arena: &Arena) {
        let next = arena.wrap(self.pos() + self.vel());
        self.set_pos(next);
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians (0 = +x)
    pub angle: f32,
    pub vel: Vec2,
    pub radius: f32,
    /// Ticks remaining until the next shot is allowed
    pub shoot_cooldown: u32,
}

impl Ship {
    /// A stationary ship at the arena center, facing +x
    pub fn new(arena: &Arena, settings: &Settings) -> Self {
        Self {
            pos: arena.center(),
            angle: 0.0,
            vel: Vec2::ZERO,
            radius: settings.ship_radius,
            shoot_cooldown: 0,
        }
    }

    /// Apply steering and thrust, move, then tick down the shot cooldown.
    ///
    /// Both turn keys held cancel out. Thrust is unbounded: there is no
    /// drag and no terminal velocity.
    pub fn update(&mut self, input: &TickInput, arena: &Arena, settings: &Settings) {
        if input.turn_left {
            self.angle -= settings.ship_turn_step;
        }
        if input.turn_right {
            self.angle += settings.ship_turn_step;
        }
        if input.thrust {
            self.vel += heading_vector(self.angle) * settings.ship_thrust;
        }

        self.drift(arena);

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
    }

    /// Fire a bullet if the cooldown has elapsed.
    ///
    /// Returns `None` without touching any state while cooling down.
    pub fn try_shoot(&mut self, settings: &Settings) -> Option<Bullet> {
        if self.shoot_cooldown > 0 {
            return None;
        }
        self.shoot_cooldown = settings.ship_shoot_cooldown;
        Some(Bullet::new(self.pos, self.angle, settings))
    }
}

impl Body for Ship {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Ticks left before the bullet fizzles
    pub life: u32,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32, settings: &Settings) -> Self {
        Self {
            pos,
            vel: heading_vector(angle) * settings.bullet_speed,
            radius: settings.bullet_radius,
            life: settings.bullet_life,
        }
    }

    pub fn update(&mut self, arena: &Arena) {
        self.drift(arena);
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life == 0
    }
}

impl Body for Bullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// Whether an asteroid came from a spawn or from splitting a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidTier {
    Full,
    Fragment,
}

/// A drifting rock. Its collision radius is its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub tier: AsteroidTier,
    /// Difficulty level baked into the velocity at creation
    pub speed_multiplier: f32,
}

impl Asteroid {
    /// Create an asteroid with a fresh random velocity.
    ///
    /// Each velocity component is drawn independently from
    /// `[-max_speed, max_speed) * speed_multiplier`.
    pub fn spawn(
        pos: Vec2,
        size: f32,
        tier: AsteroidTier,
        speed_multiplier: f32,
        settings: &Settings,
        rng: &mut impl RandomSource,
    ) -> Self {
        let max = settings.asteroid_max_speed;
        let vel = Vec2::new(rng.range(-max, max), rng.range(-max, max)) * speed_multiplier;
        Self {
            pos,
            vel,
            size,
            tier,
            speed_multiplier,
        }
    }

    /// A full-size asteroid at a uniformly random point in the arena
    pub fn spawn_anywhere(
        arena: &Arena,
        speed_multiplier: f32,
        settings: &Settings,
        rng: &mut impl RandomSource,
    ) -> Self {
        let pos = arena.wrap(Vec2::new(
            rng.range(0.0, arena.width),
            rng.range(0.0, arena.height),
        ));
        Self::spawn(
            pos,
            settings.asteroid_size,
            AsteroidTier::Full,
            speed_multiplier,
            settings,
            rng,
        )
    }

    pub fn update(&mut self, arena: &Arena) {
        self.drift(arena);
    }

    /// Whether destroying this asteroid produces fragments
    #[inline]
    pub fn splits(&self, settings: &Settings) -> bool {
        self.size > settings.fragment_threshold
    }

    /// Pieces left behind when this asteroid is destroyed.
    ///
    /// Two half-size fragments at the parent's position, each with its own
    /// velocity scaled by the multiplier current at the time of the split.
    /// Asteroids at or below the fragment threshold leave nothing.
    pub fn fragments(
        &self,
        speed_multiplier: f32,
        settings: &Settings,
        rng: &mut impl RandomSource,
    ) -> Vec<Asteroid> {
        if !self.splits(settings) {
            return Vec::new();
        }
        let size = self.size / 2.0;
        (0..2)
            .map(|_| {
                Asteroid::spawn(
                    self.pos,
                    size,
                    AsteroidTier::Fragment,
                    speed_multiplier,
                    settings,
                    rng,
                )
            })
            .collect()
    }
}

impl Body for Asteroid {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.size
    }
    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}
