//! Simulation configuration.
//!
//! Every tunable constant of the simulation lives in [`SimulationConfig`].
//! The defaults reproduce the reference scene; the values are not exposed
//! to the player.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::bodies::PlanetId;
use crate::error::ConfigError;
use crate::types::{
    COMET_PHASE_STEP, SHIP_ACCELERATION, SHIP_FRICTION, SHIP_ROTATION_SPEED, TICK_DT,
    TICK_RATE_HZ,
};

/// Configuration used to build and advance a [`SolarSystem`](crate::simulation::SolarSystem).
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Maximum ticks per second.
    pub tick_rate_hz: f64,
    /// Angular step per tick for orbits, spins and star flicker.
    pub dt: f64,
    /// Comet phase increment per tick.
    pub comet_phase_step: f64,
    /// Comet ellipse semi-major axis (along x).
    pub comet_semi_major: f64,
    /// Comet ellipse semi-minor axis (along z).
    pub comet_semi_minor: f64,
    /// Number of asteroids in the belt.
    pub belt_count: usize,
    /// Radius of the belt circle.
    pub belt_radius: f64,
    /// Collision radius of a single asteroid.
    pub asteroid_radius: f64,
    /// Number of background stars.
    pub star_count: usize,
    /// Star shell radius range.
    pub star_shell: (f64, f64),
    /// Star flicker rate range.
    pub flicker_rate: (f64, f64),
    /// Initial ship position.
    pub ship_start: DVec3,
    /// Collision radius of the ship.
    pub ship_radius: f64,
    /// Thrust per tick.
    pub ship_acceleration: f64,
    /// Yaw per tick in radians.
    pub ship_rotation_speed: f64,
    /// Velocity multiplier per tick.
    pub ship_friction: f64,
    /// Planet carrying the ring ornament.
    pub ringed_planet: PlanetId,
    /// Seed for the starfield; `None` draws from entropy.
    pub star_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            dt: TICK_DT,
            comet_phase_step: COMET_PHASE_STEP,
            comet_semi_major: 6.0,
            comet_semi_minor: 3.0,
            belt_count: 100,
            belt_radius: 3.3,
            asteroid_radius: 0.02,
            star_count: 150,
            star_shell: (20.0, 30.0),
            flicker_rate: (1.0, 3.0),
            ship_start: DVec3::new(-8.0, 0.0, 0.0),
            ship_radius: 0.15,
            ship_acceleration: SHIP_ACCELERATION,
            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_friction: SHIP_FRICTION,
            ringed_planet: PlanetId::Saturn,
            star_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check that every value is usable before the world is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(ConfigError::InvalidTickRate(self.tick_rate_hz));
        }

        positive("tick step", self.dt)?;
        finite("comet phase step", self.comet_phase_step)?;
        finite("ship acceleration", self.ship_acceleration)?;
        finite("ship rotation speed", self.ship_rotation_speed)?;

        positive("comet semi-major axis", self.comet_semi_major)?;
        positive("comet semi-minor axis", self.comet_semi_minor)?;
        positive("belt radius", self.belt_radius)?;
        positive("asteroid radius", self.asteroid_radius)?;
        positive("ship radius", self.ship_radius)?;

        if self.belt_count == 0 {
            return Err(ConfigError::EmptyBelt);
        }

        ordered_range("star shell", self.star_shell)?;
        positive("star shell inner radius", self.star_shell.0)?;
        ordered_range("flicker rate", self.flicker_rate)?;
        positive("minimum flicker rate", self.flicker_rate.0)?;

        if !(self.ship_friction > 0.0 && self.ship_friction <= 1.0) {
            return Err(ConfigError::InvalidFriction(self.ship_friction));
        }

        Ok(())
    }

}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

/// Both ends finite, in order, and a finite width to sample across.
fn ordered_range(name: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max })
    }
}
