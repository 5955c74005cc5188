//! Property-based tests for the per-tick update rules using proptest.
//!
//! These tests verify the geometric invariants of each entity across a wide
//! range of tick counts and inputs.

use bevy::math::DVec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bodies::{CelestialBody, PlanetId, planet_data};
use crate::comet::Comet;
use crate::config::SimulationConfig;
use crate::input::HeldKeys;
use crate::simulation::SolarSystem;
use crate::spaceship::{ShipHandling, Spaceship};
use crate::starfield::flicker_intensity;

const HANDLING: ShipHandling = ShipHandling {
    acceleration: 0.03,
    rotation_speed: 0.03,
    friction: 0.98,
};

fn planet_strategy() -> impl Strategy<Value = PlanetId> {
    prop::sample::select(PlanetId::ALL.to_vec())
}

fn held_keys_strategy() -> impl Strategy<Value = HeldKeys> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| HeldKeys {
            up,
            down,
            left,
            right,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After N ticks the orbit angle is N * speed * dt and the planet lies on
    /// its circle.
    #[test]
    fn prop_planet_stays_on_orbit(id in planet_strategy(), ticks in 0usize..5000) {
        let data = planet_data(id);
        let mut planet = CelestialBody::new(&data);
        for _ in 0..ticks {
            planet.advance(0.01);
        }

        let expected_angle = ticks as f64 * data.orbit_speed * 0.01;
        prop_assert!((planet.orbit_angle - expected_angle).abs() < 1e-9);

        let pos = planet.position();
        prop_assert!((pos.length() - data.orbit_radius).abs() < 1e-9);
        prop_assert_eq!(pos.y, 0.0);
    }

    /// The comet always satisfies (x/a)² + (z/b)² = 1.
    #[test]
    fn prop_comet_on_ellipse(ticks in 0usize..5000) {
        let mut comet = Comet::new(6.0, 3.0);
        for _ in 0..ticks {
            comet.advance(0.007);
        }
        let pos = comet.position();
        let lhs = (pos.x / 6.0).powi(2) + (pos.z / 3.0).powi(2);
        prop_assert!((lhs - 1.0).abs() < 1e-9, "ellipse residual {}", lhs - 1.0);
    }

    /// Star intensity never leaves [0.3, 1.0].
    #[test]
    fn prop_intensity_bounded(phase in -1.0e6f64..1.0e6) {
        let i = flicker_intensity(phase);
        prop_assert!((0.3..=1.0).contains(&i), "intensity {}", i);
    }

    /// With no keys held, velocity decays by 0.98 per tick.
    #[test]
    fn prop_idle_velocity_decays(
        vx in -1.0f64..1.0,
        vz in -1.0f64..1.0,
        ticks in 0i32..300,
    ) {
        let mut ship = Spaceship::new(DVec3::ZERO, 0.15);
        ship.velocity = DVec3::new(vx, 0.0, vz);
        for _ in 0..ticks {
            ship.apply_input(HeldKeys::NONE, &HANDLING);
        }
        let factor = 0.98f64.powi(ticks);
        prop_assert!((ship.velocity.x - vx * factor).abs() < 1e-12);
        prop_assert!((ship.velocity.z - vz * factor).abs() < 1e-12);
    }

    /// Any key sequence keeps the heading unit length and in the orbital plane.
    #[test]
    fn prop_heading_stays_unit(keys in prop::collection::vec(held_keys_strategy(), 0..400)) {
        let mut ship = Spaceship::new(DVec3::new(-8.0, 0.0, 0.0), 0.15);
        for held in keys {
            ship.apply_input(held, &HANDLING);
        }
        prop_assert!((ship.facing().length() - 1.0).abs() < 1e-9);
        prop_assert!(ship.facing().y.abs() < 1e-12);
        prop_assert!(ship.position.y.abs() < 1e-12);
    }

    /// The asteroid belt never moves, whatever the ship does.
    #[test]
    fn prop_belt_is_static(
        seed in any::<u64>(),
        keys in prop::collection::vec(held_keys_strategy(), 0..200),
    ) {
        let mut system = SolarSystem::new(SimulationConfig::default(), &mut StdRng::seed_from_u64(seed))
            .expect("default config is valid");
        let before = system.belt().asteroids().to_vec();
        for held in keys {
            system.tick(held);
        }
        prop_assert_eq!(system.belt().asteroids(), before.as_slice());
    }
}
