//! Tab rendering methods for EditorApp.
//!
//! Contains render_*_tab methods for each dock panel:
//! - Controls: frame/layer selection, duration, display mode
//! - LayerEditor: LED grid of the active layer
//! - Preview: 3D view of the cube
//!
//! Also includes DockTabs wrapper for egui_dock TabViewer.

use eframe::egui;
use egui_dock::TabViewer;

use crate::app::{DockTab, EditorApp};
use crate::widgets;

impl EditorApp {
    /// Render controls tab. Requests go to the event bus.
    pub fn render_controls_tab(&mut self, ui: &mut egui::Ui) {
        let actions = widgets::controls::render(ui, &self.sync, &mut self.controls_state);
        for evt in actions.events {
            self.event_bus.emit_boxed(evt);
        }
    }

    /// Render layer editor tab
    pub fn render_layer_editor_tab(&mut self, ui: &mut egui::Ui) {
        let actions = widgets::layer_editor::render(
            ui,
            &self.sync,
            self.settings.led_button_size,
            self.settings.show_axis_labels,
        );
        for evt in actions.events {
            self.event_bus.emit_boxed(evt);
        }
    }

    /// Render the preview sink; camera input is handled by the widget.
    pub fn render_preview_tab(&mut self, ui: &mut egui::Ui) {
        widgets::preview::render(ui, self.sync.sink_mut(), self.settings.preview_led_radius);
    }
}

// === DockTabs wrapper for egui_dock ===

/// Wrapper struct for egui_dock TabViewer implementation.
/// Holds mutable reference to EditorApp for rendering tabs.
pub struct DockTabs<'a> {
    pub app: &'a mut EditorApp,
}

impl<'a> TabViewer for DockTabs<'a> {
    type Tab = DockTab;

    fn title(&mut self, tab: &mut DockTab) -> egui::WidgetText {
        match tab {
            DockTab::Controls => "Controls".into(),
            DockTab::LayerEditor => "Layer Editor".into(),
            DockTab::Preview => "Preview".into(),
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut DockTab) {
        match tab {
            DockTab::Controls => self.app.render_controls_tab(ui),
            DockTab::LayerEditor => self.app.render_layer_editor_tab(ui),
            DockTab::Preview => self.app.render_preview_tab(ui),
        }
    }
}
