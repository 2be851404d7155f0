//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // G — toggle grid
        if i.key_pressed(egui::Key::G) {
            state.settings.grid.visible = !state.settings.grid.visible;
        }
        // A — toggle debug axes
        if i.key_pressed(egui::Key::A) {
            state.settings.axes.visible = !state.settings.axes.visible;
        }
        // S — toggle skybox
        if i.key_pressed(egui::Key::S) {
            state.settings.skybox.visible = !state.settings.skybox.visible;
        }
        // R — reset camera
        if i.key_pressed(egui::Key::R) {
            viewport.reset_camera();
        }
        // Delete — remove all stamps
        if i.key_pressed(egui::Key::Delete) {
            toolbar::action_clear_stamps(state);
        }
    });
}
