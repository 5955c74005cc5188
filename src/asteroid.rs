//! Static asteroid belt.
//!
//! Asteroids are placed once, evenly spaced on a circle, and never move.
//! There are no mutable accessors: the belt is read-only after construction.

use std::f64::consts::TAU;

use bevy::math::DVec3;

use crate::types::point_on_circle;

/// A single rock of the belt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    position: DVec3,
    radius: f64,
}

impl Asteroid {
    pub fn new(position: DVec3, radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Collision radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Ordered ring of static asteroids.
#[derive(Clone, Debug, Default)]
pub struct AsteroidBelt {
    asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    /// Place `count` asteroids on a circle of `belt_radius`, asteroid `i` at
    /// angle `i * 2π / count`.
    pub fn ring(count: usize, belt_radius: f64, asteroid_radius: f64) -> Self {
        let step = TAU / count as f64;
        let asteroids = (0..count)
            .map(|i| Asteroid::new(point_on_circle(belt_radius, i as f64 * step), asteroid_radius))
            .collect();
        Self { asteroids }
    }

    /// Build a belt from explicit asteroids.
    pub fn from_asteroids(asteroids: Vec<Asteroid>) -> Self {
        Self { asteroids }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter()
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}
