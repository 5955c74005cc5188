//! Camera for viewing the solar system.
//!
//! A perspective camera looks at the Sun from above the orbital plane;
//! the scroll wheel moves it closer or farther along its line of sight.

use bevy::{
    input::mouse::{AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};

/// Closest camera distance from the Sun.
pub const MIN_DISTANCE: f32 = 2.0;

/// Farthest camera distance from the Sun.
pub const MAX_DISTANCE: f32 = 60.0;

/// Initial camera distance, framing the ship's start and the comet.
pub const DEFAULT_DISTANCE: f32 = 16.0;

/// Fraction of the distance changed per scroll line.
pub const ZOOM_SPEED: f32 = 0.1;

/// Pixel scroll distance treated as one line (trackpads report pixels).
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Direction from the Sun to the camera: above and in front of the plane.
const VIEW_DIRECTION: Vec3 = Vec3::new(0.0, 0.6, 0.8);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking camera state.
#[derive(Resource)]
pub struct CameraState {
    pub distance: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl CameraState {
    /// Apply a scroll delta in lines; positive scrolls zoom in.
    pub fn zoom(&mut self, lines: f32) {
        let factor = (1.0 - ZOOM_SPEED).powf(lines);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Camera transform for the current distance.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(VIEW_DIRECTION.normalize() * self.distance)
            .looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, camera_zoom);
    }
}

/// Spawn the main camera.
fn setup_camera(mut commands: Commands, state: Res<CameraState>) {
    commands.spawn((Camera3d::default(), state.transform(), MainCamera));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut camera_state: ResMut<CameraState>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };
    camera_state.zoom(lines);
    *transform = camera_state.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamped() {
        let mut state = CameraState::default();
        for _ in 0..100 {
            state.zoom(1.0);
        }
        assert_eq!(state.distance, MIN_DISTANCE);

        for _ in 0..100 {
            state.zoom(-1.0);
        }
        assert_eq!(state.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_large_scroll_stays_smooth() {
        let mut state = CameraState::default();
        state.zoom(10.0);
        let expected = DEFAULT_DISTANCE * 0.9_f32.powf(10.0);
        assert!((state.distance - expected).abs() < 1e-3);
        assert!(state.distance > MIN_DISTANCE);
    }

    #[test]
    fn test_zoom_in_then_out_returns() {
        let mut state = CameraState::default();
        state.zoom(3.0);
        state.zoom(-3.0);
        assert!((state.distance - DEFAULT_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_camera_looks_at_sun() {
        let transform = CameraState::default().transform();
        assert!((transform.translation.length() - DEFAULT_DISTANCE).abs() < 1e-4);
        let forward = transform.forward();
        let to_sun = (-transform.translation).normalize();
        assert!(forward.dot(to_sun) > 0.999);
    }
}
