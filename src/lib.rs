//! Solarium - Interactive Solar System Flight Sandbox
//!
//! A library crate providing the simulation world, its per-tick update
//! rules, and the Bevy plugins that draw it.

pub mod asteroid;
pub mod bodies;
pub mod camera;
pub mod collision;
pub mod comet;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod simulation;
pub mod spaceship;
pub mod starfield;
pub mod time;
pub mod types;

#[cfg(test)]
mod proptest_simulation;
#[cfg(test)]
pub mod test_utils;
