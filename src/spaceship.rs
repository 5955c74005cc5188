//! Player spaceship kinematics.
//!
//! Each tick the held keys are applied in a fixed order: forward thrust,
//! reverse thrust, left turn, right turn. Friction is then applied and the
//! velocity is integrated into the position. Several keys may be held at
//! once and all of them act in the same tick.

use bevy::math::DVec3;

use crate::input::HeldKeys;
use crate::types::rotate_about_up;

/// Thrust, turn and drag parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipHandling {
    pub acceleration: f64,
    pub rotation_speed: f64,
    pub friction: f64,
}

/// The player-controlled ship.
#[derive(Clone, Debug)]
pub struct Spaceship {
    pub position: DVec3,
    pub velocity: DVec3,
    facing: DVec3,
    radius: f64,
    /// Whether the ship overlaps any asteroid this tick.
    pub collided: bool,
}

impl Spaceship {
    /// Create a ship at rest facing +x.
    pub fn new(position: DVec3, radius: f64) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            facing: DVec3::X,
            radius,
            collided: false,
        }
    }

    /// Unit heading vector.
    pub fn facing(&self) -> DVec3 {
        self.facing
    }

    /// Heading angle about the vertical axis, 0 along +x.
    pub fn heading_angle(&self) -> f64 {
        (-self.facing.z).atan2(self.facing.x)
    }

    /// Collision radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Turn the heading by `angle` radians about the vertical axis.
    pub fn turn(&mut self, angle: f64) {
        self.facing = rotate_about_up(self.facing, angle);
    }

    /// Apply one tick of input, friction and integration.
    pub fn apply_input(&mut self, keys: HeldKeys, handling: &ShipHandling) {
        if keys.up {
            self.velocity += self.facing.normalize() * handling.acceleration;
        }
        if keys.down {
            self.velocity -= self.facing.normalize() * handling.acceleration;
        }
        if keys.left {
            self.turn(handling.rotation_speed);
        }
        if keys.right {
            self.turn(-handling.rotation_speed);
        }

        self.velocity *= handling.friction;
        self.position += self.velocity;
    }
}
