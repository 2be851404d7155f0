//! Viewport overlay drawing (axis labels, hit readout, hints)

use egui::Painter;

use crate::placement::PlacementMarker;
use crate::state::AppState;

use super::camera::ArcBallCamera;

/// Draw axis labels just past the axis line tips
pub fn draw_axis_labels(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    length: f32,
) {
    let tip = length + 0.3;
    let labels = [
        ([tip, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, tip, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, tip], "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Camera info overlay in the top-right corner
pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
        ),
        egui::FontId::monospace(10.0),
        egui::Color32::from_rgb(160, 160, 170),
    );
}

/// Marker pose readout in the bottom-left corner while the marker is shown
pub fn draw_marker_readout(painter: &Painter, rect: egui::Rect, marker: &PlacementMarker) {
    if !marker.shown {
        return;
    }
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.bottom() - 8.0),
        egui::Align2::LEFT_BOTTOM,
        format!(
            "place: {:.2}  {:.2}  {:.2}",
            marker.position.x, marker.position.y, marker.position.z
        ),
        egui::FontId::monospace(11.0),
        egui::Color32::from_rgb(120, 220, 130),
    );
}

/// Hint shown while the scene has no stamps yet
pub fn draw_nav_hint(painter: &Painter, rect: egui::Rect, state: &AppState) {
    if state.scene.stamp_count() > 0 {
        return;
    }
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        "Hover the cube and click to stamp · MMB/Alt orbit · RMB pan · wheel zoom",
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(100, 100, 110),
    );
}
