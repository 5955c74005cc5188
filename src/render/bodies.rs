//! Scene spawning for the Sun, planets, ring, comet, asteroid belt and ship.
//!
//! Each simulated entity gets one drawable primitive tagged with a marker
//! component; [`super::sync`] keeps them in step with the [`SolarSystem`].

use bevy::prelude::*;

use crate::bodies::{PlanetId, planet_data};
use crate::render::labels::BodyLabel;
use crate::render::trails::Trail;
use crate::simulation::SolarSystem;
use crate::types::to_render;

/// Visual radius of the Sun.
pub const SUN_RADIUS: f32 = 0.5;

/// Major radius of the ring ornament.
pub const RING_RADIUS: f32 = 0.35;

/// Cross-section thickness of the ring ornament.
pub const RING_THICKNESS: f32 = 0.03;

/// Visual radius of the comet.
pub const COMET_RADIUS: f32 = 0.05;

/// Ship color while clear of the belt.
pub const SHIP_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Ship color while touching an asteroid.
pub const SHIP_COLLIDED_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Drawable for a planet.
#[derive(Component)]
pub struct PlanetVisual {
    pub id: PlanetId,
}

/// Marker for the ring ornament.
#[derive(Component)]
pub struct RingVisual;

/// Marker for the comet.
#[derive(Component)]
pub struct CometVisual;

/// Marker for the player ship.
#[derive(Component)]
pub struct ShipVisual;

/// Plugin spawning the drawable primitives.
pub struct SceneBodiesPlugin;

impl Plugin for SceneBodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            spawn_solar_system.run_if(resource_exists::<SolarSystem>),
        );
    }
}

/// Get the visual color for a planet.
pub fn planet_color(id: PlanetId) -> Color {
    match id {
        PlanetId::Mercury => Color::srgb(0.5, 0.5, 0.5),
        PlanetId::Venus => Color::srgb(1.0, 1.0, 0.0),
        PlanetId::Earth => Color::srgb(0.0, 0.0, 1.0),
        PlanetId::Mars => Color::srgb(1.0, 0.0, 0.0),
        PlanetId::Jupiter => Color::srgb(1.0, 0.6, 0.0),
        PlanetId::Saturn => Color::srgb(0.0, 1.0, 1.0),
    }
}

/// Spawn every body of the solar system.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    system: Res<SolarSystem>,
) {
    // Sun glows
    let sun_color = Color::srgb(1.0, 0.6, 0.0);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * 2.0,
            ..default()
        })),
        Transform::IDENTITY,
        BodyLabel::new("Sun", 20.0),
    ));

    for planet in system.planets() {
        let id = planet.id();
        let data = planet_data(id);
        let color = planet_color(id);

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(data.body_radius as f32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(to_render(planet.position())),
            PlanetVisual { id },
            Trail::new(color),
            BodyLabel::new(id.name(), 15.0),
        ));
    }

    // Torus lies in the XZ plane, so its axis is already vertical
    let ring = system.ring();
    commands.spawn((
        Mesh3d(meshes.add(Torus {
            minor_radius: RING_THICKNESS * 0.5,
            major_radius: RING_RADIUS,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        })),
        Transform::from_translation(to_render(ring.position())),
        RingVisual,
    ));

    let comet = system.comet();
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(COMET_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        })),
        Transform::from_translation(to_render(comet.position())),
        CometVisual,
        Trail::new(Color::WHITE),
    ));

    // Belt rocks share one mesh and material
    let rock_radius = system
        .belt()
        .asteroids()
        .first()
        .map_or(0.02, |rock| rock.radius() as f32);
    let rock_mesh = meshes.add(Sphere::new(rock_radius));
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.7, 0.7),
        ..default()
    });
    for rock in system.belt().iter() {
        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(to_render(rock.position())),
        ));
    }

    let ship = system.ship();
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(ship.radius() as f32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SHIP_COLOR,
            ..default()
        })),
        Transform::from_translation(to_render(ship.position)),
        ShipVisual,
    ));

    info!(
        "Spawned sun, {} planets, ring, comet, {} asteroids and ship",
        system.planets().len(),
        system.belt().len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_colors_distinct() {
        let colors: Vec<Color> = PlanetId::ALL.iter().map(|&id| planet_color(id)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
