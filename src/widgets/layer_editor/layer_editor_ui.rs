use eframe::egui;

use crate::core::{PreviewSink, Synchronizer};
use crate::widgets::layer_editor::layer_editor::{
    LayerEditorActions, axis_label_text, fit_button_size, row_to_y,
};
use crate::widgets::layer_editor::layer_events::{FillLayerEvent, ToggleLedEvent};

const LED_ON: egui::Color32 = egui::Color32::from_rgb(235, 40, 40);
const SPACING: f32 = 4.0;
const LABEL_WIDTH: f32 = 18.0;

/// Render the active layer as a grid of LED buttons (dock tab).
pub fn render<S: PreviewSink>(
    ui: &mut egui::Ui,
    sync: &Synchronizer<S>,
    max_button_size: f32,
    axis_labels: bool,
) -> LayerEditorActions {
    let mut actions = LayerEditorActions::new();
    let layer = sync.animation().active_frame().active_layer();
    let (x_count, y_count) = layer.size();

    ui.horizontal(|ui| {
        ui.strong(format!(
            "Frame {:02}  Layer {:02}",
            sync.current_frame() + 1,
            layer.z() + 1
        ));
        ui.separator();
        if ui.button("All On").clicked() {
            actions.send(FillLayerEvent(true));
        }
        if ui.button("All Off").clicked() {
            actions.send(FillLayerEvent(false));
        }
    });
    ui.separator();

    let label_pad = if axis_labels { LABEL_WIDTH + SPACING } else { 0.0 };
    let avail = ui.available_size();
    let size = fit_button_size(
        (avail.x - label_pad, avail.y - label_pad),
        x_count,
        y_count,
        SPACING,
        max_button_size,
    );

    egui::ScrollArea::both().auto_shrink([false; 2]).show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::vec2(SPACING, SPACING);
        for row in 0..y_count {
            let y = row_to_y(row, y_count);
            ui.horizontal(|ui| {
                if axis_labels {
                    axis_label(ui, &axis_label_text(y), egui::vec2(LABEL_WIDTH, size));
                }
                for x in 0..x_count {
                    let on = layer.get(x, y).unwrap_or(false);
                    if led_button(ui, on, size)
                        .on_hover_text(format!("x {} y {}", x + 1, y + 1))
                        .clicked()
                    {
                        actions.send(ToggleLedEvent { x, y });
                    }
                }
            });
        }
        if axis_labels {
            ui.horizontal(|ui| {
                ui.add_space(LABEL_WIDTH + SPACING);
                for x in 0..x_count {
                    axis_label(ui, &axis_label_text(x), egui::vec2(size, LABEL_WIDTH));
                }
            });
        }
    });

    actions
}

/// Painted round LED button
fn led_button(ui: &mut egui::Ui, on: bool, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let radius = size * 0.45;
        if on {
            ui.painter().circle_filled(rect.center(), radius, LED_ON);
        } else {
            ui.painter().circle_filled(rect.center(), radius, ui.visuals().extreme_bg_color);
        }
        ui.painter().circle_stroke(rect.center(), radius, visuals.fg_stroke);
    }
    response
}

fn axis_label(ui: &mut egui::Ui, text: &str, size: egui::Vec2) {
    ui.add_sized(size, egui::Label::new(egui::RichText::new(text).monospace().weak()));
}
