//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use solarium::config::SimulationConfig;
use solarium::simulation::{SimulationPlugin, SolarSystem};
use solarium::time::{TickClock, TimePlugin};

/// Default world with a fixed starfield seed.
pub fn solar_system() -> SolarSystem {
    SolarSystem::new(SimulationConfig::default(), &mut StdRng::seed_from_u64(2024))
        .expect("default config is valid")
}

/// Headless app that runs one simulation tick per `update()`.
pub fn headless_app(config: SimulationConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(TickClock::every_frame())
        .insert_resource(config)
        .add_plugins((SimulationPlugin, TimePlugin));
    app
}

/// Seeded default config.
pub fn seeded_config() -> SimulationConfig {
    SimulationConfig {
        star_seed: Some(7),
        ..default()
    }
}

/// Residual of the ellipse equation `(x/a)² + (z/b)² - 1`.
pub fn ellipse_residual(pos: DVec3, a: f64, b: f64) -> f64 {
    (pos.x / a).powi(2) + (pos.z / b).powi(2) - 1.0
}
