//! Main application loop - eframe::App implementation.
//!
//! Contains the core update() method that runs each frame:
//! - Event processing
//! - UI rendering (menu, dock panels, dialogs)
//! - Input handling
//! - State persistence

use eframe::egui;
use egui_dock::DockArea;
use log::{info, trace};

use crate::app::{DockTabs, EditorApp};
use crate::dialogs::prefs::{AppSettings, render_settings_window};
use crate::help::{HelpProvider, render_help_window};
use crate::widgets;
use crate::widgets::layer_editor::LayerEditorHelp;

impl eframe::App for EditorApp {
    /// Main frame update - called every frame by eframe.
    ///
    /// Flow:
    /// 1. Apply theme and font settings
    /// 2. Menu bar, then process queued events
    /// 3. Render UI (status bar, dock panels, dialogs)
    /// 4. Handle keyboard input
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.reset_settings_pending {
            self.reset_settings();
            self.reset_settings_pending = false;
        }
        self.settings.apply_style(ctx);

        let menu_actions = widgets::menu::render(ctx);
        for evt in menu_actions.events {
            self.event_bus.emit_boxed(evt);
        }

        self.handle_events(ctx);

        self.status_bar
            .render(ctx, &self.sync, &self.metadata, self.edit_count.get());

        egui::CentralPanel::default().show(ctx, |ui| {
            let dock_style = egui_dock::Style::from_egui(ctx.style().as_ref());
            let mut dock_state =
                std::mem::replace(&mut self.dock_state, EditorApp::default_dock_state());
            {
                let mut tabs = DockTabs { app: self };
                DockArea::new(&mut dock_state)
                    .style(dock_style)
                    .show_close_buttons(false)
                    .show_inside(ui, &mut tabs);
            }
            self.dock_state = dock_state;
        });

        self.handle_keyboard_input(ctx);

        if self.show_settings {
            render_settings_window(
                ctx,
                &mut self.show_settings,
                &mut self.settings,
                Some(&self.event_bus),
            );
        }

        if let Some(dialog) = self.setup_dialog.as_mut() {
            let keep_open = dialog.render(ctx, &self.event_bus);
            if !keep_open {
                trace!("Setup dialog closed");
                self.setup_dialog = None;
            }
        }

        if self.show_help {
            let sections: [&dyn HelpProvider; 2] = [&LayerEditorHelp, self.sync.sink()];
            render_help_window(ctx, &mut self.show_help, &sections);
        }

        self.render_error_window(ctx);

        // Widgets emitted after handle_events(); process them next frame
        if self.event_bus.queue_len() > 0 {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.show_help = self.show_help;

        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!(
                "App state saved: cube={}, frames={}",
                self.settings.last_cube,
                self.settings.last_frame_count
            );
        }
    }
}

impl EditorApp {
    pub fn reset_settings(&mut self) {
        info!("Resetting settings to default");
        self.settings = AppSettings::default();
        self.sync.sink_mut().camera.reset();
        self.dock_state = EditorApp::default_dock_state();
    }

    fn render_error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_msg.clone() else {
            return;
        };
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new("Error")
            .id(egui::Id::new("error_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if !open || dismissed {
            self.error_msg = None;
        }
    }
}
