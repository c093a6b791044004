//! Collision detection and response
//!
//! Runs once per tick after everything has moved. Hits are marked during the
//! scan and the collections are compacted afterwards, so removal never shifts
//! indices under the loop.

use glam::Vec2;

use super::arena::circles_overlap;
use super::entity::{Asteroid, Body, Bullet, Ship};
use super::rng::RandomSource;
use crate::settings::Settings;

/// Whether two bodies overlap (plane distance, no wrap shortcut)
#[inline]
pub fn collides(a: &impl Body, b: &impl Body) -> bool {
    circles_overlap(a.pos(), a.radius(), b.pos(), b.radius())
}

/// An asteroid destroyed by a bullet this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Kill {
    pub pos: Vec2,
    pub size: f32,
    /// Number of fragments it left behind (0 or 2)
    pub fragments: usize,
}

/// What the collision pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Kills in resolution order (highest asteroid index first)
    pub kills: Vec<Kill>,
    /// A surviving asteroid overlaps the ship
    pub ship_hit: bool,
}

/// Resolve bullet/asteroid and ship/asteroid contacts.
///
/// Asteroids are scanned from last to first, and each one against the live
/// bullets from last to first. The first bullet found destroys the asteroid
/// and is itself consumed, so it cannot hit anything else this tick.
/// Fragments are appended to the asteroid list after the scan and are not
/// tested against the ship until the next tick. The ship is tested against
/// every asteroid that survived the bullet pass.
pub fn resolve_collisions(
    ship: &Ship,
    bullets: &mut Vec<Bullet>,
    asteroids: &mut Vec<Asteroid>,
    speed_multiplier: f32,
    settings: &Settings,
    rng: &mut impl RandomSource,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut bullet_spent = vec![false; bullets.len()];
    let mut asteroid_dead = vec![false; asteroids.len()];
    let mut fragments = Vec::new();

    for ai in (0..asteroids.len()).rev() {
        let asteroid = &asteroids[ai];
        let hit = (0..bullets.len())
            .rev()
            .find(|&bi| !bullet_spent[bi] && collides(asteroid, &bullets[bi]));

        if let Some(bi) = hit {
            bullet_spent[bi] = true;
            asteroid_dead[ai] = true;

            let pieces = asteroid.fragments(speed_multiplier, settings, rng);
            log::debug!(
                "Asteroid size {} destroyed at ({:.1}, {:.1}), {} fragments",
                asteroid.size,
                asteroid.pos.x,
                asteroid.pos.y,
                pieces.len()
            );
            report.kills.push(Kill {
                pos: asteroid.pos,
                size: asteroid.size,
                fragments: pieces.len(),
            });
            fragments.extend(pieces);
        }
    }

    report.ship_hit = asteroids
        .iter()
        .zip(&asteroid_dead)
        .any(|(asteroid, &dead)| !dead && collides(ship, asteroid));

    compact(bullets, &bullet_spent);
    compact(asteroids, &asteroid_dead);
    asteroids.extend(fragments);

    report
}

/// Drop every element whose flag is set, preserving order
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::Arena;
    use crate::sim::entity::AsteroidTier;
    use crate::sim::rng::SequenceRandom;

    fn settings() -> Settings {
        Settings::default()
    }

    fn ship_at(pos: Vec2) -> Ship {
        let s = settings();
        let mut ship = Ship::new(&Arena::default(), &s);
        ship.pos = pos;
        ship
    }

    fn rock(pos: Vec2, size: f32) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            size,
            tier: AsteroidTier::Full,
            speed_multiplier: 1.0,
        }
    }

    fn bullet(pos: Vec2) -> Bullet {
        Bullet::new(pos, 0.0, &settings())
    }

    #[test]
    fn test_large_asteroid_splits() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![bullet(Vec2::new(105.0, 100.0))];
        let mut asteroids = vec![rock(Vec2::new(100.0, 100.0), 40.0)];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert!(bullets.is_empty());
        assert_eq!(asteroids.len(), 2);
        for a in &asteroids {
            assert_eq!(a.size, 20.0);
            assert_eq!(a.pos, Vec2::new(100.0, 100.0));
            assert_eq!(a.tier, AsteroidTier::Fragment);
        }
        assert_eq!(report.kills.len(), 1);
        assert_eq!(report.kills[0].fragments, 2);
        assert!(!report.ship_hit);
    }

    #[test]
    fn test_small_asteroid_vanishes() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![bullet(Vec2::new(100.0, 100.0))];
        let mut asteroids = vec![rock(Vec2::new(100.0, 100.0), 20.0)];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert!(bullets.is_empty());
        assert!(asteroids.is_empty());
        assert_eq!(report.kills[0].fragments, 0);
        // No velocities drawn for a terminal fragment
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_one_bullet_one_asteroid() {
        // A single bullet overlapping two asteroids only destroys one of them:
        // the highest-index asteroid is scanned first.
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![bullet(Vec2::new(100.0, 100.0))];
        let mut asteroids = vec![
            rock(Vec2::new(90.0, 100.0), 15.0),
            rock(Vec2::new(110.0, 100.0), 15.0),
        ];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert_eq!(report.kills.len(), 1);
        assert_eq!(report.kills[0].pos, Vec2::new(110.0, 100.0));
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].pos, Vec2::new(90.0, 100.0));
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_last_bullet_wins_ties() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![
            bullet(Vec2::new(100.0, 100.0)),
            bullet(Vec2::new(101.0, 100.0)),
        ];
        let mut asteroids = vec![rock(Vec2::new(100.0, 100.0), 10.0)];

        resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert!(asteroids.is_empty());
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ship_hit_signalled() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = Vec::new();
        let mut asteroids = vec![
            rock(Vec2::new(100.0, 100.0), 40.0),
            rock(Vec2::new(430.0, 300.0), 25.0),
        ];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert!(report.ship_hit);
        // Nothing removed by a ship hit
        assert_eq!(asteroids.len(), 2);
    }

    #[test]
    fn test_shot_asteroid_cannot_hit_ship() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![bullet(Vec2::new(420.0, 300.0))];
        let mut asteroids = vec![rock(Vec2::new(420.0, 300.0), 15.0)];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );

        assert!(!report.ship_hit);
        assert!(asteroids.is_empty());
    }

    #[test]
    fn test_tangent_does_not_collide() {
        let mut rng = SequenceRandom::constant(0.5);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = Vec::new();
        // 10 (ship) + 30 (rock) == 40 apart
        let mut asteroids = vec![rock(Vec2::new(440.0, 300.0), 30.0)];

        let report = resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            1.0,
            &settings(),
            &mut rng,
        );
        assert!(!report.ship_hit);
    }

    #[test]
    fn test_fragments_use_current_multiplier() {
        let mut rng = SequenceRandom::constant(0.0);
        let ship = ship_at(Vec2::new(400.0, 300.0));
        let mut bullets = vec![bullet(Vec2::new(100.0, 100.0))];
        let mut asteroids = vec![rock(Vec2::new(100.0, 100.0), 40.0)];

        resolve_collisions(
            &ship,
            &mut bullets,
            &mut asteroids,
            4.0,
            &settings(),
            &mut rng,
        );

        for a in &asteroids {
            assert_eq!(a.speed_multiplier, 4.0);
            // unit 0.0 maps to the bottom of [-1.5, 1.5), times 4
            assert!((a.vel.x + 6.0).abs() < 1e-5);
        }
    }
}
