//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
mod overlays;
pub use placer_gui_lib::viewport::{camera, mesh, picking};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::build::MeshCache;
use crate::placement::PlacementController;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;

/// 3D viewport panel: camera controls, surface placement, GL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    controller: PlacementController,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    cache: MeshCache,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            controller: PlacementController::new(),
            gl_renderer: None,
            cache: MeshCache::new(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ───────────────────────────────────
        self.handle_camera(&response, ui);

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.01);
        }

        // ── Pointer tracking (device pixels relative to the viewport) ──
        if let Some(pos) = response.hover_pos() {
            self.controller.on_pointer_move(
                pos.x - rect.left(),
                pos.y - rect.top(),
                rect.width(),
                rect.height(),
            );
        }

        // ── Rebuild meshes if the scene changed ───────────────
        let version = state.scene.version();
        if !self.cache.is_valid(version) {
            self.cache.rebuild(&state.scene.scene, version);
            state.build_errors = self.cache.errors().clone();
        }

        // ── Per-frame placement tick ──────────────────────────
        let aspect = rect.width() / rect.height();
        self.controller.tick(
            &self.camera,
            aspect,
            self.cache.target_meshes(),
            self.cache.target_aabbs(),
        );
        state.hover_hit = self
            .controller
            .marker
            .shown
            .then(|| self.controller.marker.position.to_array());

        // ── Click stamps a copy (alt is reserved for orbiting) ──
        if response.clicked() && !ui.input(|i| i.modifiers.alt) {
            self.controller.on_click(&mut state.scene);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ──────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ──────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt))
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x * 0.01, delta.y * 0.01);
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera.clone();
        let meshes = self.cache.meshes_clone();
        let version = self.cache.rebuild_count();
        let marker_mesh = self.controller.marker_mesh();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let skybox_settings = state.settings.skybox.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.update_skybox(gl, &skybox_settings);
                    r.sync_from_meshes(gl, &meshes, version);
                    r.sync_marker(gl, marker_mesh.as_ref());

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        skybox_visible: skybox_settings.visible,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.settings.axes.visible && state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, state.settings.axes.length);
        }
        overlays::draw_camera_info(&painter, rect, &self.camera);
        overlays::draw_marker_readout(&painter, rect, &self.controller.marker);
        overlays::draw_nav_hint(&painter, rect, state);
    }
}
