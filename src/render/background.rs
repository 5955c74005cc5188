//! Background rendering for the solar system visualization.
//!
//! Provides the flickering starfield and scene lighting.

use bevy::prelude::*;

use crate::simulation::SolarSystem;
use crate::types::to_render;

/// Visual radius of a background star.
pub const STAR_RADIUS: f32 = 0.05;

/// Direction the distant light shines along.
pub const DISTANT_LIGHT_DIRECTION: Vec3 = Vec3::new(-1.0, 0.5, 0.0);

/// Drawable for one background star.
#[derive(Component)]
pub struct StarVisual {
    pub index: usize,
}

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK)).add_systems(
            Startup,
            (
                spawn_starfield.run_if(resource_exists::<SolarSystem>),
                spawn_lighting,
            ),
        );
    }
}

/// Grayscale color for a star intensity.
pub fn star_color(intensity: f64) -> Color {
    let i = intensity as f32;
    Color::srgb(i, i, i)
}

/// Spawn one drawable per simulated star.
///
/// Every star gets its own material so its brightness can change on its own.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    system: Res<SolarSystem>,
) {
    let star_mesh = meshes.add(Sphere::new(STAR_RADIUS));

    for (index, star) in system.stars().iter().enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: star_color(star.intensity()),
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(to_render(star.base_position())),
            StarVisual { index },
        ));
    }

    info!("Spawned {} background stars", system.stars().len());
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Light radiating from the Sun
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY,
    ));

    // Distant light sits toward (1, -0.5, 0) and shines back at the scene
    commands.spawn((
        DirectionalLight {
            illuminance: 3000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(DISTANT_LIGHT_DIRECTION, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_color_is_gray() {
        let color = star_color(0.65).to_srgba();
        assert_eq!(color.red, color.green);
        assert_eq!(color.green, color.blue);
        assert!((color.red - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_distant_light_shines_from_below_right() {
        let transform = Transform::default().looking_to(DISTANT_LIGHT_DIRECTION, Vec3::Y);
        let forward = transform.forward();
        assert!(forward.x < 0.0);
        assert!(forward.y > 0.0);
        assert!(forward.z.abs() < 1e-6);
    }
}
