//! Animation setup dialog
//!
//! Edits name, cube size and frame count. Committing rebuilds the animation;
//! every LED state is discarded.

use eframe::egui;
use log::debug;

use crate::core::event_bus::EventBus;
use crate::entities::dims::{MAX_AXIS, MIN_AXIS};
use crate::entities::metadata::MAX_NAME_LEN;
use crate::entities::{AnimationMetadata, CubeDims};
use crate::error::{EditorError, Result};

use super::setup_events::ApplySetupEvent;

/// Upper bound for the frame count field
pub const MAX_FRAMES: usize = 999;

/// Setup dialog state
#[derive(Clone, Debug)]
pub struct SetupDialog {
    pub name: String,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub frames: usize,
}

impl Default for SetupDialog {
    fn default() -> Self {
        let dims = CubeDims::default();
        Self {
            name: String::new(),
            x: dims.x,
            y: dims.y,
            z: dims.z,
            frames: 1,
        }
    }
}

impl SetupDialog {
    /// Dialog prefilled from the current animation
    pub fn from_current(metadata: &AnimationMetadata, dims: CubeDims, frames: usize) -> Self {
        Self {
            name: metadata.name().to_string(),
            x: dims.x,
            y: dims.y,
            z: dims.z,
            frames,
        }
    }

    pub fn dims(&self) -> CubeDims {
        CubeDims::new(self.x, self.y, self.z)
    }

    /// Controller count for the sizes currently entered
    pub fn controller_count(&self) -> usize {
        self.dims().controller_count()
    }

    /// Check the entered values and build the event to commit
    pub fn validate(&self) -> Result<ApplySetupEvent> {
        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(EditorError::Range {
                what: "name length",
                value: len as i64,
                min: 0,
                max: MAX_NAME_LEN as i64,
            });
        }
        for (what, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !(MIN_AXIS..=MAX_AXIS).contains(&value) {
                return Err(EditorError::Range {
                    what,
                    value: value as i64,
                    min: MIN_AXIS as i64,
                    max: MAX_AXIS as i64,
                });
            }
        }
        if !(1..=MAX_FRAMES).contains(&self.frames) {
            return Err(EditorError::Range {
                what: "frames",
                value: self.frames as i64,
                min: 1,
                max: MAX_FRAMES as i64,
            });
        }
        Ok(ApplySetupEvent {
            name: self.name.clone(),
            dims: self.dims(),
            frames: self.frames,
        })
    }

    /// Render dialog; returns false once closed (OK or Cancel)
    pub fn render(&mut self, ctx: &egui::Context, event_bus: &EventBus) -> bool {
        let mut should_close = false;
        let mut commit = false;

        egui::Window::new("Animation Setup")
            .id(egui::Id::new("setup_window"))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::Grid::new("setup_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.add(egui::TextEdit::singleline(&mut self.name).char_limit(MAX_NAME_LEN));
                        ui.end_row();

                        for (label, value) in [("X", &mut self.x), ("Y", &mut self.y), ("Z", &mut self.z)] {
                            ui.label(label);
                            ui.add(egui::DragValue::new(value).range(MIN_AXIS..=MAX_AXIS));
                            ui.end_row();
                        }

                        ui.label("Frames");
                        ui.add(egui::DragValue::new(&mut self.frames).range(1..=MAX_FRAMES));
                        ui.end_row();

                        ui.label("Controllers");
                        ui.monospace(self.controller_count().to_string());
                        ui.end_row();
                    });

                ui.add_space(4.0);
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "Applying clears every LED of the animation.",
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        commit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        should_close = true;
                    }
                });
            });

        if commit {
            match self.validate() {
                Ok(event) => {
                    debug!("Setup committed: {:?}", event);
                    event_bus.emit(event);
                    should_close = true;
                }
                // DragValue ranges and char_limit keep the fields valid
                Err(e) => debug!("Setup rejected: {}", e),
            }
        }

        !should_close
    }
}
