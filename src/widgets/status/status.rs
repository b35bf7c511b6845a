use eframe::egui;

use crate::core::{PreviewSink, Synchronizer};
use crate::entities::AnimationMetadata;

/// Status bar component
pub struct StatusBar {
    pub current_message: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            current_message: String::new(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
    }

    /// Text segments shown left to right
    pub fn segments<S: PreviewSink>(
        sync: &Synchronizer<S>,
        metadata: &AnimationMetadata,
        edit_count: u64,
    ) -> Vec<String> {
        let animation = sync.animation();
        let frame = animation.active_frame();
        let dims = sync.dims();
        vec![
            metadata.name().to_string(),
            format!("{:>8}", dims.to_string()),
            format!(
                "F {:02}/{:02}  L {:02}/{:02}",
                sync.current_frame() + 1,
                animation.frame_count(),
                sync.current_layer() + 1,
                frame.layer_count()
            ),
            format!("{:>5}ms of {}ms", frame.duration(), animation.total_duration_ms()),
            format!("Lit: {}/{}", frame.lit_count(), dims.len()),
            format!("Ctrl: {}", dims.controller_count()),
            sync.mode().label().to_string(),
            format!("Edits: {}", edit_count),
        ]
    }

    /// Render status bar at bottom of screen
    pub fn render<S: PreviewSink>(
        &self,
        ctx: &egui::Context,
        sync: &Synchronizer<S>,
        metadata: &AnimationMetadata,
        edit_count: u64,
    ) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let segments = Self::segments(sync, metadata, edit_count);
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        ui.separator();
                    }
                    ui.monospace(segment);
                }

                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.monospace(&self.current_message);
                }
            });
        });
    }
}
