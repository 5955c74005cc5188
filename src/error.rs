//! Startup errors.
//!
//! The tick path never fails; the only fallible step is building the world
//! from a [`SimulationConfig`](crate::config::SimulationConfig).

/// Invalid simulation configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid tick rate: {0} Hz (must be positive and finite)")]
    InvalidTickRate(f64),

    #[error("invalid {name}: {value} (must be positive and finite)")]
    NonPositive { name: &'static str, value: f64 },

    #[error("invalid {name}: {value} (must be finite)")]
    NotFinite { name: &'static str, value: f64 },

    #[error("invalid {name} range [{min}, {max}]")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid friction {0} (must lie in (0, 1])")]
    InvalidFriction(f64),

    #[error("asteroid belt needs at least one asteroid")]
    EmptyBelt,
}
