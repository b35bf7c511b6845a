use eframe::egui;

use crate::core::{DisplayMode, PreviewSink, Synchronizer};
use crate::widgets::controls::controls::{ControlsActions, ControlsState, index_label, step_buttons_enabled};
use crate::widgets::controls::controls_events::*;

/// Render the controls panel (dock tab): frame/layer selectors, duration,
/// display mode.
pub fn render<S: PreviewSink>(
    ui: &mut egui::Ui,
    sync: &Synchronizer<S>,
    state: &mut ControlsState,
) -> ControlsActions {
    let mut actions = ControlsActions::new();
    let animation = sync.animation();
    let frame_idx = sync.current_frame();
    let frame_count = animation.frame_count();
    let layer_idx = sync.current_layer();
    let layer_count = animation.active_frame().layer_count();

    state.sync_duration(frame_idx, animation.active_frame().duration());

    egui::Grid::new("controls_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Frame");
            ui.horizontal(|ui| {
                if let Some(idx) = selector(ui, "frame_combo", frame_idx, frame_count) {
                    actions.send(SelectFrameEvent(idx));
                }
            });
            ui.end_row();

            ui.label("Layer");
            ui.horizontal(|ui| {
                if let Some(idx) = selector(ui, "layer_combo", layer_idx, layer_count) {
                    actions.send(SelectLayerEvent(idx));
                }
            });
            ui.end_row();

            ui.label("Duration");
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.duration_text)
                        .desired_width(70.0)
                        .hint_text("ms"),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.send(SetDurationEvent(state.duration_text.trim().to_string()));
                    state.invalidate();
                }
                ui.label("ms");
            });
            ui.end_row();

            ui.label("Preview");
            ui.vertical(|ui| {
                let mut mode = sync.mode();
                for option in [DisplayMode::FullCube, DisplayMode::ActiveLayer] {
                    ui.radio_value(&mut mode, option, option.label());
                }
                if mode != sync.mode() {
                    actions.send(SetDisplayModeEvent(mode));
                }
            });
            ui.end_row();
        });

    actions
}

/// Combo box plus up/down buttons; returns the newly picked index.
fn selector(ui: &mut egui::Ui, id: &str, current: usize, count: usize) -> Option<usize> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(index_label(current))
        .width(56.0)
        .show_ui(ui, |ui| {
            for idx in 0..count {
                if ui.selectable_label(idx == current, index_label(idx)).clicked() && idx != current {
                    picked = Some(idx);
                }
            }
        });

    let (up, down) = step_buttons_enabled(current, count);
    if ui.add_enabled(up, egui::Button::new("⏶")).on_hover_text("Next").clicked() {
        picked = Some(current + 1);
    }
    if ui.add_enabled(down, egui::Button::new("⏷")).on_hover_text("Previous").clicked() {
        picked = current.checked_sub(1);
    }
    picked
}
