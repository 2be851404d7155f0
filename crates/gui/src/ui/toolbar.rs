use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("Demo Scene").clicked() {
            action_load_demo(state);
        }

        ui.separator();

        let stamps = state.scene.stamp_count();
        if ui
            .add_enabled(stamps > 0, egui::Button::new("Clear Stamps"))
            .clicked()
        {
            action_clear_stamps(state);
        }
        ui.weak(format!("{stamps} stamped"));
    });
}

pub fn action_load_demo(state: &mut AppState) {
    state.scene.set_scene(crate::fixtures::demo_scene());
    tracing::info!("Loaded demo scene");
}

pub fn action_clear_stamps(state: &mut AppState) {
    let removed = state.scene.stamp_count();
    state.scene.clear_stamps();
    tracing::info!("Removed {removed} stamps");
}
