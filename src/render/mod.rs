//! Rendering systems for the solar system.
//!
//! This module is the scene side of the simulation: it spawns one drawable
//! per simulated entity, mirrors the simulation state into them, and adds
//! trails, labels and lighting.

pub mod background;
pub mod bodies;
pub mod labels;
pub mod sync;
pub mod trails;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::SceneBodiesPlugin;
use self::labels::LabelPlugin;
use self::sync::{
    SyncTransformsSet, draw_ship_heading, sync_comet_transform, sync_planet_transforms,
    sync_ring_transform, sync_ship, sync_star_brightness,
};
use self::trails::TrailPlugin;
use crate::simulation::SolarSystem;
use crate::time::tick_due;
use crate::types::SimulationSet;

// Re-export for use in other modules
pub use self::labels::{BodyLabel, LabelSettings};
pub use self::trails::{Trail, TrailSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SceneBodiesPlugin, BackgroundPlugin, TrailPlugin, LabelPlugin))
            .add_systems(
                Update,
                (
                    sync_planet_transforms,
                    sync_ring_transform,
                    sync_comet_transform,
                    sync_ship,
                )
                    .in_set(SyncTransformsSet)
                    .in_set(SimulationSet::Sync)
                    .run_if(resource_exists::<SolarSystem>),
            )
            .add_systems(
                Update,
                sync_star_brightness
                    .in_set(SimulationSet::Sync)
                    .run_if(resource_exists::<SolarSystem>)
                    .run_if(tick_due),
            )
            .add_systems(
                Update,
                draw_ship_heading
                    .after(SimulationSet::Sync)
                    .run_if(resource_exists::<SolarSystem>),
            );
    }
}
