//! The simulation world and its per-tick update.
//!
//! [`SolarSystem`] owns every simulated entity. It is a Bevy resource, but
//! the tick itself is plain Rust: [`SolarSystem::tick`] takes the held-key
//! snapshot and advances all entities in a fixed order, so it can be
//! driven without an `App` in tests.

use bevy::app::AppExit;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::asteroid::AsteroidBelt;
use crate::bodies::{CelestialBody, PlanetId, RingOrnament, all_planets};
use crate::collision::{first_hit, hits_belt};
use crate::comet::Comet;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::input::HeldKeys;
use crate::spaceship::{ShipHandling, Spaceship};
use crate::starfield::{Star, generate_starfield};
use crate::time::tick_due;
use crate::types::SimulationSet;

/// Plugin building the [`SolarSystem`] at startup and ticking it.
///
/// Expects `ButtonInput<KeyCode>` (from Bevy's input plugin) and a
/// [`TickClock`](crate::time::TickClock) (from [`TimePlugin`](crate::time::TimePlugin)).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .configure_sets(
                Update,
                (SimulationSet::Clock, SimulationSet::Step, SimulationSet::Sync).chain(),
            )
            .add_systems(PreStartup, build_solar_system)
            .add_systems(
                Update,
                step_simulation
                    .in_set(SimulationSet::Step)
                    .run_if(resource_exists::<SolarSystem>)
                    .run_if(tick_due),
            );
    }
}

/// All simulated entities.
#[derive(Resource, Clone, Debug)]
pub struct SolarSystem {
    config: SimulationConfig,
    handling: ShipHandling,
    planets: Vec<CelestialBody>,
    ring: RingOrnament,
    belt: AsteroidBelt,
    comet: Comet,
    stars: Vec<Star>,
    ship: Spaceship,
    ticks: u64,
}

impl SolarSystem {
    /// Build the initial world, drawing the starfield from `rng`.
    pub fn new<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let planets: Vec<CelestialBody> = all_planets().iter().map(CelestialBody::new).collect();
        let ring = RingOrnament::new(&planets[config.ringed_planet.index()]);
        let belt = AsteroidBelt::ring(config.belt_count, config.belt_radius, config.asteroid_radius);
        let comet = Comet::new(config.comet_semi_major, config.comet_semi_minor);
        let stars = generate_starfield(rng, config.star_count, config.star_shell, config.flicker_rate);
        let ship = Spaceship::new(config.ship_start, config.ship_radius);
        let handling = ShipHandling {
            acceleration: config.ship_acceleration,
            rotation_speed: config.ship_rotation_speed,
            friction: config.ship_friction,
        };

        let mut system = Self {
            config,
            handling,
            planets,
            ring,
            belt,
            comet,
            stars,
            ship,
            ticks: 0,
        };
        system.ship.collided = hits_belt(system.ship.position, system.ship.radius(), &system.belt);
        Ok(system)
    }

    /// Build the world with a starfield seeded from the config (or entropy).
    pub fn from_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, &mut rng)
    }

    /// Replace the asteroid belt.
    pub fn with_belt(mut self, belt: AsteroidBelt) -> Self {
        self.belt = belt;
        self.ship.collided = hits_belt(self.ship.position, self.ship.radius(), &self.belt);
        self
    }

    /// Advance every entity by one tick.
    ///
    /// Planets, ring, comet and stars are independent of each other;
    /// collision detection always runs after the ship has moved.
    pub fn tick(&mut self, keys: HeldKeys) {
        let dt = self.config.dt;

        for planet in &mut self.planets {
            planet.advance(dt);
        }
        self.ring.follow(&self.planets[self.ring.planet().index()]);

        self.comet.advance(self.config.comet_phase_step);

        for star in &mut self.stars {
            star.advance(dt);
        }

        self.ship.apply_input(keys, &self.handling);
        self.ship.collided = hits_belt(self.ship.position, self.ship.radius(), &self.belt);

        self.ticks += 1;
    }

    /// Run `n` ticks with the same held keys.
    pub fn run_ticks(&mut self, n: u64, keys: HeldKeys) {
        for _ in 0..n {
            self.tick(keys);
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }

    pub fn planet(&self, id: PlanetId) -> &CelestialBody {
        &self.planets[id.index()]
    }

    pub fn ring(&self) -> &RingOrnament {
        &self.ring
    }

    pub fn belt(&self) -> &AsteroidBelt {
        &self.belt
    }

    pub fn comet(&self) -> &Comet {
        &self.comet
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn ship(&self) -> &Spaceship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Spaceship {
        &mut self.ship
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Build the world from the configured [`SimulationConfig`].
///
/// An invalid configuration is logged and ends the app.
fn build_solar_system(
    mut commands: Commands,
    config: Res<SimulationConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    match SolarSystem::from_config(config.clone()) {
        Ok(system) => {
            info!(
                "Solar system ready: {} planets, {} asteroids, {} stars",
                system.planets().len(),
                system.belt().len(),
                system.stars().len(),
            );
            commands.insert_resource(system);
        }
        Err(err) => {
            error!("Invalid simulation config: {err}");
            exit.write(AppExit::error());
        }
    }
}

/// Snapshot held keys and advance the world one tick.
fn step_simulation(keys: Res<ButtonInput<KeyCode>>, mut system: ResMut<SolarSystem>) {
    let was_colliding = system.ship().collided;

    system.tick(HeldKeys::snapshot(&keys));

    let ship = system.ship();
    match (was_colliding, ship.collided) {
        (false, true) => {
            if let Some(rock) = first_hit(ship.position, ship.radius(), system.belt()) {
                info!("Ship hit an asteroid at {:.2?}", rock.position());
            }
        }
        (true, false) => debug!("Ship clear of the asteroid belt"),
        _ => {}
    }
}
