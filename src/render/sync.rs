//! Synchronization between the simulation and the scene.
//!
//! Pushes positions, orientations and colors from the [`SolarSystem`]
//! resource into the `Transform`s and materials of the drawables.

use bevy::prelude::*;

use crate::render::background::{StarVisual, star_color};
use crate::render::bodies::{
    CometVisual, PlanetVisual, RingVisual, SHIP_COLLIDED_COLOR, SHIP_COLOR,
    ShipVisual,
};
use crate::simulation::SolarSystem;
use crate::types::to_render;

/// System set label for transform sync (trails record after it).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncTransformsSet;

/// Length of the drawn heading arrow.
const HEADING_ARROW_LENGTH: f32 = 0.5;

/// Sync planet positions and spin.
pub fn sync_planet_transforms(
    system: Res<SolarSystem>,
    mut query: Query<(&PlanetVisual, &mut Transform)>,
) {
    for (visual, mut transform) in query.iter_mut() {
        let planet = system.planet(visual.id);
        transform.translation = to_render(planet.position());
        transform.rotation = Quat::from_rotation_y(planet.spin_angle as f32);
    }
}

/// Sync the ring onto its planet.
pub fn sync_ring_transform(
    system: Res<SolarSystem>,
    mut query: Query<&mut Transform, With<RingVisual>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation = to_render(system.ring().position());
    }
}

/// Sync the comet position.
pub fn sync_comet_transform(
    system: Res<SolarSystem>,
    mut query: Query<&mut Transform, With<CometVisual>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation = to_render(system.comet().position());
    }
}

/// Sync ship position, heading and collision color.
pub fn sync_ship(
    system: Res<SolarSystem>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<ShipVisual>>,
    mut last_collided: Local<Option<bool>>,
) {
    let ship = system.ship();
    let recolor = *last_collided != Some(ship.collided);

    for (mut transform, material) in query.iter_mut() {
        transform.translation = to_render(ship.position);
        transform.rotation = Quat::from_rotation_y(ship.heading_angle() as f32);

        if recolor && let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = if ship.collided {
                SHIP_COLLIDED_COLOR
            } else {
                SHIP_COLOR
            };
        }
    }

    *last_collided = Some(ship.collided);
}

/// Apply each star's flicker intensity to its material.
pub fn sync_star_brightness(
    system: Res<SolarSystem>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(&StarVisual, &MeshMaterial3d<StandardMaterial>)>,
) {
    let stars = system.stars();
    for (visual, material) in query.iter() {
        let Some(star) = stars.get(visual.index) else {
            continue;
        };
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = star_color(star.intensity());
        }
    }
}

/// Draw the ship heading as an arrow.
pub fn draw_ship_heading(mut gizmos: Gizmos, system: Res<SolarSystem>) {
    let ship = system.ship();
    let start = to_render(ship.position);
    let end = start + to_render(ship.facing()) * HEADING_ARROW_LENGTH;
    let color = if ship.collided {
        SHIP_COLLIDED_COLOR
    } else {
        SHIP_COLOR
    };
    gizmos.arrow(start, end, color);
}
