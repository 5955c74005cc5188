//! Motion trails using Bevy Gizmos.
//!
//! Bodies carrying a [`Trail`] record their rendered position on simulation
//! ticks; the recorded history is drawn as a polyline every frame. History
//! is bounded: the oldest points are dropped first.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::time::{TickClock, tick_due};
use crate::types::SimulationSet;

/// Plugin providing trail recording and drawing.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSettings>()
            .add_systems(
                Update,
                record_trails
                    .in_set(SimulationSet::Sync)
                    .after(super::sync::SyncTransformsSet)
                    .run_if(tick_due),
            )
            .add_systems(Update, draw_trails.after(SimulationSet::Sync));
    }
}

/// Settings for trail rendering.
#[derive(Resource)]
pub struct TrailSettings {
    /// Whether trails are drawn.
    pub visible: bool,
    /// Maximum stored points per trail.
    pub max_points: usize,
    /// Record one point every `stride` ticks.
    pub stride: u64,
    /// Alpha applied to the body color.
    pub alpha: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            visible: true,
            max_points: 2000,
            stride: 2,
            alpha: 0.6,
        }
    }
}

/// Bounded history of positions for one body.
#[derive(Component, Clone, Debug)]
pub struct Trail {
    pub color: Color,
    points: VecDeque<Vec3>,
}

impl Trail {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            points: VecDeque::new(),
        }
    }

    /// Append a point, dropping the oldest beyond `max_points`.
    pub fn push(&mut self, point: Vec3, max_points: usize) {
        self.points.push_back(point);
        while self.points.len() > max_points {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Record the current position of every trailed body.
fn record_trails(
    settings: Res<TrailSettings>,
    clock: Res<TickClock>,
    mut trails: Query<(&Transform, &mut Trail)>,
) {
    if clock.ticks() % settings.stride.max(1) != 0 {
        return;
    }

    for (transform, mut trail) in trails.iter_mut() {
        trail.push(transform.translation, settings.max_points);
    }
}

/// Draw every trail as a polyline.
fn draw_trails(mut gizmos: Gizmos, settings: Res<TrailSettings>, trails: Query<&Trail>) {
    if !settings.visible {
        return;
    }

    for trail in trails.iter() {
        if trail.len() < 2 {
            continue;
        }
        let color = trail.color.with_alpha(settings.alpha);
        gizmos.linestrip(trail.points(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_is_bounded() {
        let mut trail = Trail::new(Color::WHITE);
        for i in 0..10 {
            trail.push(Vec3::splat(i as f32), 4);
        }
        assert_eq!(trail.len(), 4);

        // Oldest points dropped first
        let points: Vec<Vec3> = trail.points().collect();
        assert_eq!(points[0], Vec3::splat(6.0));
        assert_eq!(points[3], Vec3::splat(9.0));
    }

    #[test]
    fn test_new_trail_is_empty() {
        let mut trail = Trail::new(Color::WHITE);
        assert!(trail.is_empty());
        trail.push(Vec3::ZERO, 4);
        assert!(!trail.is_empty());
    }
}
