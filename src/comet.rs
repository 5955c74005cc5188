//! Comet on a fixed ellipse centered on the Sun.

use bevy::math::DVec3;

/// Comet following `(a cos φ, 0, b sin φ)`.
#[derive(Clone, Debug)]
pub struct Comet {
    /// Accumulated phase angle. Never normalized.
    pub phase_angle: f64,
    semi_major: f64,
    semi_minor: f64,
}

impl Comet {
    /// Create a comet at phase 0 (on the +x axis).
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            phase_angle: 0.0,
            semi_major,
            semi_minor,
        }
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Current position on the ellipse.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            self.semi_major * self.phase_angle.cos(),
            0.0,
            self.semi_minor * self.phase_angle.sin(),
        )
    }

    /// Advance by one tick.
    pub fn advance(&mut self, phase_step: f64) {
        self.phase_angle += phase_step;
    }
}
