use eframe::egui;
use glam::Vec4;

use super::cube_preview::{CubePreview, Shown};

/// Colors for lit and unlit LEDs
const LED_ON: egui::Color32 = egui::Color32::from_rgb(235, 40, 40);
const LED_OFF: egui::Color32 = egui::Color32::from_gray(90);
const LED_HIDDEN: egui::Color32 = egui::Color32::from_gray(45);

/// Radians per dragged pixel
const ORBIT_SPEED: f32 = 0.01;

/// Render the 3D preview filling the available space.
///
/// `led_radius` is the radius of a lit LED at unit depth.
pub fn render(ui: &mut egui::Ui, preview: &mut CubePreview, led_radius: f32) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let Some(dims) = preview.dims() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No cube loaded",
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    if response.dragged() {
        let delta = response.drag_delta();
        preview.camera.orbit(-delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            preview.camera.zoom((-scroll * 0.002).exp());
        }
    }
    if response.double_clicked() {
        preview.camera.reset();
    }

    let vp = preview.camera.view_projection(rect.width() / rect.height().max(1.0));
    let half = rect.size() * 0.5;
    let scale = half.x.min(half.y) / 80.0;

    // Project every LED, then paint back to front
    let mut points: Vec<(f32, egui::Pos2, usize, bool)> = Vec::with_capacity(dims.len());
    for z in 0..dims.z {
        for y in 0..dims.y {
            for x in 0..dims.x {
                let clip = vp * Vec4::from((preview.world_pos(x, y, z), 1.0));
                if clip.w <= 0.0 {
                    continue;
                }
                let ndc = clip.truncate() / clip.w;
                let pos = rect.center() + egui::vec2(ndc.x * half.x, -ndc.y * half.y);
                points.push((clip.w, pos, z, preview.is_lit(x, y, z)));
            }
        }
    }
    points.sort_by(|a, b| b.0.total_cmp(&a.0));

    let shown_layer = match preview.shown() {
        Shown::Cube => None,
        Shown::Layer(z) => Some(z),
    };
    for (depth, pos, z, lit) in points {
        let radius = (led_radius * scale / depth).max(1.0);
        let color = if lit {
            LED_ON
        } else if shown_layer.is_some_and(|layer| layer != z) {
            LED_HIDDEN
        } else {
            LED_OFF
        };
        if lit {
            painter.circle_filled(pos, radius, color);
        } else {
            painter.circle_stroke(pos, radius * 0.6, egui::Stroke::new(1.0, color));
        }
    }

    let caption = match shown_layer {
        None => format!("{}  full cube", dims),
        Some(z) => format!("{}  layer {:02}", dims, z + 1),
    };
    painter.text(
        rect.left_top() + egui::vec2(6.0, 6.0),
        egui::Align2::LEFT_TOP,
        caption,
        egui::FontId::monospace(12.0),
        ui.visuals().text_color(),
    );
}
