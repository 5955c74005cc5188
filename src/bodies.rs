//! Planets and the ring ornament.
//!
//! Planets follow fixed circular orbits in the y = 0 plane: the orbit angle
//! advances at a constant rate and the position is always derived from it.
//! Each planet also spins about the vertical axis, which only affects how
//! it is drawn.

use bevy::math::DVec3;

use crate::types::point_on_circle;

/// Identifier for the planets of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

impl PlanetId {
    /// All planets, innermost first.
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
        }
    }

    /// Index into [`PlanetId::ALL`] and into the planet list of a system.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Static data for a planet.
#[derive(Clone, Copy, Debug)]
pub struct PlanetData {
    pub id: PlanetId,
    /// Distance from the Sun.
    pub orbit_radius: f64,
    /// Visual radius of the sphere.
    pub body_radius: f64,
    /// Orbit angle rate per tick unit.
    pub orbit_speed: f64,
    /// Spin angle rate per tick unit.
    pub spin_speed: f64,
}

/// Get the static data for a planet.
pub fn planet_data(id: PlanetId) -> PlanetData {
    let (orbit_radius, body_radius, orbit_speed, spin_speed) = match id {
        PlanetId::Mercury => (1.0, 0.1, 1.2, 1.5),
        PlanetId::Venus => (1.5, 0.15, 0.9, 1.2),
        PlanetId::Earth => (2.0, 0.17, 0.7, 2.0),
        PlanetId::Mars => (2.7, 0.12, 0.5, 1.9),
        PlanetId::Jupiter => (3.8, 0.3, 0.3, 1.0),
        PlanetId::Saturn => (5.0, 0.25, 0.2, 0.9),
    };
    PlanetData {
        id,
        orbit_radius,
        body_radius,
        orbit_speed,
        spin_speed,
    }
}

/// Data for every planet, innermost first.
pub fn all_planets() -> Vec<PlanetData> {
    PlanetId::ALL.iter().map(|&id| planet_data(id)).collect()
}

/// A planet on a fixed circular orbit.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    id: PlanetId,
    orbit_radius: f64,
    orbit_speed: f64,
    spin_speed: f64,
    /// Polar angle on the orbit. Never normalized.
    pub orbit_angle: f64,
    /// Accumulated axial rotation.
    pub spin_angle: f64,
}

impl CelestialBody {
    /// Create a planet at orbit angle 0 (on the +x axis) with no spin.
    pub fn new(data: &PlanetData) -> Self {
        Self {
            id: data.id,
            orbit_radius: data.orbit_radius,
            orbit_speed: data.orbit_speed,
            spin_speed: data.spin_speed,
            orbit_angle: 0.0,
            spin_angle: 0.0,
        }
    }

    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn orbit_speed(&self) -> f64 {
        self.orbit_speed
    }

    pub fn spin_speed(&self) -> f64 {
        self.spin_speed
    }

    /// Current position, derived from the orbit angle.
    pub fn position(&self) -> DVec3 {
        point_on_circle(self.orbit_radius, self.orbit_angle)
    }

    /// Advance orbit and spin by one tick of length `dt`.
    pub fn advance(&mut self, dt: f64) {
        self.orbit_angle += self.orbit_speed * dt;
        self.spin_angle += self.spin_speed * dt;
    }
}

/// Ring rigidly attached to one planet, with zero offset.
#[derive(Clone, Debug)]
pub struct RingOrnament {
    planet: PlanetId,
    position: DVec3,
}

impl RingOrnament {
    pub fn new(planet: &CelestialBody) -> Self {
        Self {
            planet: planet.id(),
            position: planet.position(),
        }
    }

    /// The planet carrying the ring.
    pub fn planet(&self) -> PlanetId {
        self.planet
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Copy the carrying planet's position.
    pub fn follow(&mut self, planet: &CelestialBody) {
        self.position = planet.position();
    }
}
