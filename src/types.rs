//! Core simulation constants, system sets and shared math helpers.
//!
//! All simulation quantities are in abstract scene units (the Sun sits at
//! the origin, Saturn orbits at 5.0). Angles are radians, rates are per
//! tick unit unless stated otherwise.

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

/// System sets ordering one frame of the simulation.
///
/// The clock decides whether the frame ticks, the step advances the world,
/// and sync pushes the new state into the scene.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Clock,
    Step,
    Sync,
}

/// Angular step applied to orbit, spin and flicker phases every tick.
pub const TICK_DT: f64 = 0.01;

/// Phase increment of the comet per tick.
///
/// Deliberately distinct from [`TICK_DT`]: the comet is paced on its own.
pub const COMET_PHASE_STEP: f64 = 0.007;

/// Maximum number of simulation ticks per second.
pub const TICK_RATE_HZ: f64 = 60.0;

/// Thrust added to the ship velocity per tick while a thrust key is held.
pub const SHIP_ACCELERATION: f64 = 0.03;

/// Yaw applied to the ship heading per tick while a turn key is held.
pub const SHIP_ROTATION_SPEED: f64 = 0.03;

/// Velocity multiplier applied every tick.
pub const SHIP_FRICTION: f64 = 0.98;

/// Vertical axis of the scene: orbits lie in the plane normal to it.
pub const UP_AXIS: DVec3 = DVec3::Y;

/// Rotate `v` by `angle` radians about the vertical axis.
///
/// Positive angles turn +x towards -z (counter-clockwise seen from above).
pub fn rotate_about_up(v: DVec3, angle: f64) -> DVec3 {
    DQuat::from_axis_angle(UP_AXIS, angle) * v
}

/// Point on a circle of `radius` in the orbital plane at polar `angle`.
pub fn point_on_circle(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Convert a simulation position to render coordinates.
pub fn to_render(v: DVec3) -> Vec3 {
    v.as_vec3()
}
