//! Body labels using egui for text rendering.
//!
//! Renders the Sun's and each planet's name next to the body.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Name tag attached to a body.
#[derive(Component, Clone, Debug)]
pub struct BodyLabel {
    pub text: &'static str,
    /// Offset right of and above the body, in screen pixels.
    pub offset: f32,
}

impl BodyLabel {
    pub fn new(text: &'static str, offset: f32) -> Self {
        Self { text, offset }
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Font size in points.
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 12.0,
        }
    }
}

/// Draw labels for every tagged body.
fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    bodies: Query<(&BodyLabel, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(settings.font_size);

            for (label, transform) in bodies.iter() {
                let Ok(screen_pos) =
                    camera.world_to_viewport(camera_transform, transform.translation())
                else {
                    continue;
                };

                // Screen y grows downward: subtract to place the label above
                let label_pos = egui::pos2(screen_pos.x + label.offset, screen_pos.y - label.offset);

                painter.text(
                    label_pos,
                    egui::Align2::LEFT_BOTTOM,
                    label.text,
                    font.clone(),
                    egui::Color32::WHITE,
                );
            }
        });
}
