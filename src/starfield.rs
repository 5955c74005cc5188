//! Flickering background starfield.
//!
//! Stars sit on a spherical shell far outside the planetary system. Each
//! star carries its own oscillation phase and rate; brightness is a pure
//! function of the phase.

use std::f64::consts::{PI, TAU};

use bevy::math::DVec3;
use rand::Rng;

/// Lowest brightness a star reaches.
pub const MIN_INTENSITY: f64 = 0.3;

/// Brightness swing above [`MIN_INTENSITY`].
pub const INTENSITY_RANGE: f64 = 0.7;

/// Map a flicker phase to a grayscale intensity in `[0.3, 1.0]`.
pub fn flicker_intensity(phase: f64) -> f64 {
    MIN_INTENSITY + INTENSITY_RANGE * (0.5 + 0.5 * phase.sin())
}

/// A single background star.
#[derive(Clone, Debug)]
pub struct Star {
    base_position: DVec3,
    flicker_rate: f64,
    /// Accumulated oscillation phase.
    pub phase: f64,
}

impl Star {
    pub fn new(base_position: DVec3, flicker_rate: f64, phase: f64) -> Self {
        Self {
            base_position,
            flicker_rate,
            phase,
        }
    }

    /// Sample a star on a shell with radius in `shell`, flicker rate in
    /// `flicker_rate` and a random phase in `[0, 2π)`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        shell: (f64, f64),
        flicker_rate: (f64, f64),
    ) -> Self {
        let r = sample_between(rng, shell);
        let theta = rng.gen_range(0.0..TAU);
        let phi = rng.gen_range(0.0..PI);
        let base_position = DVec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );
        let rate = sample_between(rng, flicker_rate);
        let phase = rng.gen_range(0.0..TAU);
        Self::new(base_position, rate, phase)
    }

    pub fn base_position(&self) -> DVec3 {
        self.base_position
    }

    pub fn flicker_rate(&self) -> f64 {
        self.flicker_rate
    }

    /// Current brightness, applied equally to R, G and B.
    pub fn intensity(&self) -> f64 {
        flicker_intensity(self.phase)
    }

    /// Advance the flicker phase by one tick.
    pub fn advance(&mut self, dt: f64) {
        self.phase += self.flicker_rate * dt;
    }
}

/// Uniform sample in `[min, max)`; `min` when the range is empty.
///
/// Interpolates instead of using `gen_range`, which rejects ranges whose
/// width is close to `f64::MAX`.
fn sample_between<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + (max - min) * rng.r#gen::<f64>()
}

/// Generate `count` random stars.
pub fn generate_starfield<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    shell: (f64, f64),
    flicker_rate: (f64, f64),
) -> Vec<Star> {
    (0..count)
        .map(|_| Star::random(rng, shell, flicker_rate))
        .collect()
}
