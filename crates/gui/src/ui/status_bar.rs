use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let object_count = state.scene.scene.objects.len();
        ui.weak(format!("Objects: {object_count}"));

        ui.separator();
        ui.weak(format!("Stamps: {}", state.scene.stamp_count()));

        ui.separator();
        match state.hover_hit {
            Some([x, y, z]) => {
                ui.label(format!("Placing at {x:.2}, {y:.2}, {z:.2} — click to stamp"));
            }
            None => {
                ui.weak("Hover a surface to place");
            }
        }

        if !state.build_errors.is_empty() {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(230, 110, 110),
                format!("{} build errors", state.build_errors.len()),
            );
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("placer v0.1");
        });
    });
}
