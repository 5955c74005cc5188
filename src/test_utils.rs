//! Test utilities for simulation tests.
//!
//! Provides fixtures for building worlds and assertions for the geometric
//! invariants of the entities.

use bevy::math::DVec3;

/// Fixtures for creating test worlds.
pub mod fixtures {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::asteroid::{Asteroid, AsteroidBelt};
    use crate::config::SimulationConfig;
    use crate::simulation::SolarSystem;

    /// Default world with a fixed starfield seed.
    pub fn solar_system() -> SolarSystem {
        SolarSystem::new(SimulationConfig::default(), &mut StdRng::seed_from_u64(0))
            .expect("default config is valid")
    }

    /// Default world whose belt is a single rock at the ship's start.
    pub fn rock_on_ship() -> SolarSystem {
        let system = solar_system();
        let rock = Asteroid::new(system.ship().position, 0.02);
        system.with_belt(AsteroidBelt::from_asteroids(vec![rock]))
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert that `pos` lies in the orbital plane at `radius` from the origin.
    ///
    /// # Panics
    /// Panics if the distance differs by more than `tolerance`.
    pub fn assert_on_circle(pos: DVec3, radius: f64, tolerance: f64) {
        let r = pos.length();
        assert!(
            (r - radius).abs() <= tolerance && pos.y.abs() <= tolerance,
            "Point {pos:?} not on circle of radius {radius} (|p| = {r})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_on_ship_collides_after_tick() {
        let mut system = fixtures::rock_on_ship();
        assert!(system.ship().collided);
        system.tick(crate::input::HeldKeys::NONE);
        assert!(system.ship().collided);
    }

    #[test]
    fn test_assert_on_circle_accepts_planet() {
        let system = fixtures::solar_system();
        for planet in system.planets() {
            assertions::assert_on_circle(planet.position(), planet.orbit_radius(), 1e-12);
        }
    }
}
