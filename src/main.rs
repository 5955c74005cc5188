//! Solarium - Interactive Solar System Flight Sandbox
//!
//! Fly a small ship through a toy solar system with the arrow keys.
//! Escape quits.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solarium::camera::CameraPlugin;
use solarium::config::SimulationConfig;
use solarium::input::InputPlugin;
use solarium::render::RenderPlugin;
use solarium::simulation::SimulationPlugin;
use solarium::time::TimePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "3D Interactive Solar System".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimulationConfig::default())
        // Add simulation plugins
        .add_plugins((SimulationPlugin, TimePlugin, InputPlugin))
        .add_plugins((CameraPlugin, RenderPlugin))
        .run();
}
