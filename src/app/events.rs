//! Event handling for EditorApp.
//!
//! Contains handlers for:
//! - Event bus events (handle_events)
//! - Keyboard input (handle_keyboard_input)

use super::EditorApp;
use crate::core::{DisplayMode, DisplayModeChangedEvent};
use crate::core::event_bus::downcast_event;
use crate::dialogs::prefs::{HotkeyAction, ResetSettingsEvent};
use crate::dialogs::setup::{ApplySetupEvent, SetupDialog};
use crate::entities::cube_events::*;
use crate::entities::parse_duration;
use crate::error::EditorError;
use crate::widgets::controls::controls_events::*;
use crate::widgets::controls::step_index;
use crate::widgets::layer_editor::layer_events::{FillLayerEvent, ToggleLedEvent};
use crate::widgets::menu::menu_events::*;

use eframe::egui;
use log::{debug, info, trace, warn};

impl EditorApp {
    /// Handle events from event bus.
    pub fn handle_events(&mut self, ctx: &egui::Context) {
        let events = self.event_bus.poll();
        for event in events {
            // === Model notifications (emitted by the synchronizer) ===
            if let Some(e) = downcast_event::<LedChangedEvent>(&event) {
                trace!("LED ({}, {}, {}) -> {}", e.x, e.y, e.z, e.state);
                continue;
            }
            if let Some(e) = downcast_event::<FrameChangedEvent>(&event) {
                trace!("Frame changed: {} -> {}", e.old_frame, e.new_frame);
                continue;
            }
            if let Some(e) = downcast_event::<LayerChangedEvent>(&event) {
                trace!("Frame {} layer changed: {} -> {}", e.frame, e.old_layer, e.new_layer);
                continue;
            }
            if let Some(e) = downcast_event::<DurationChangedEvent>(&event) {
                debug!("Frame {} duration: {}ms", e.frame, e.duration_ms);
                self.controls_state.invalidate();
                continue;
            }
            if let Some(e) = downcast_event::<CubeResizedEvent>(&event) {
                self.status_bar
                    .set_message(format!("New animation: {} x {} frames", e.dims, e.frames));
                continue;
            }
            if let Some(e) = downcast_event::<DisplayModeChangedEvent>(&event) {
                trace!("Display mode: {}", e.0.label());
                continue;
            }

            // === Panel requests ===
            if let Some(e) = downcast_event::<SelectFrameEvent>(&event) {
                if let Err(err) = self.sync.on_select_frame(e.0) {
                    self.report(err);
                }
                continue;
            }
            if let Some(e) = downcast_event::<SelectLayerEvent>(&event) {
                if let Err(err) = self.sync.on_select_layer(e.0) {
                    self.report(err);
                }
                continue;
            }
            if let Some(e) = downcast_event::<SetDurationEvent>(&event) {
                let result = parse_duration(&e.0).and_then(|ms| self.sync.on_set_duration(ms));
                if let Err(err) = result {
                    self.report(err);
                }
                self.controls_state.invalidate();
                continue;
            }
            if let Some(e) = downcast_event::<SetDisplayModeEvent>(&event) {
                self.sync.set_display_mode(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<ToggleLedEvent>(&event) {
                if let Err(err) = self.sync.toggle_led(e.x, e.y) {
                    self.report(err);
                }
                continue;
            }
            if let Some(e) = downcast_event::<FillLayerEvent>(&event) {
                let changed = self.sync.fill_active_layer(e.0);
                debug!("Fill layer {} -> {}: {} LEDs changed", self.sync.current_layer(), e.0, changed);
                continue;
            }
            if let Some(e) = downcast_event::<ApplySetupEvent>(&event) {
                self.apply_setup(e.clone());
                continue;
            }

            // === Menu ===
            if downcast_event::<NewAnimationEvent>(&event).is_some() {
                self.report(EditorError::NotImplemented("New animation"));
                continue;
            }
            if downcast_event::<OpenAnimationEvent>(&event).is_some() {
                self.report(EditorError::NotImplemented("Opening animations"));
                continue;
            }
            if downcast_event::<SaveAnimationEvent>(&event).is_some()
                || downcast_event::<SaveAnimationAsEvent>(&event).is_some()
            {
                self.report(EditorError::NotImplemented("Saving animations"));
                continue;
            }
            if downcast_event::<ToggleLibraryEvent>(&event).is_some() {
                self.report(EditorError::NotImplemented("Animation library"));
                continue;
            }
            if downcast_event::<ShowSetupEvent>(&event).is_some() {
                self.setup_dialog = Some(SetupDialog::from_current(
                    &self.metadata,
                    self.sync.dims(),
                    self.sync.animation().frame_count(),
                ));
                continue;
            }
            if downcast_event::<ShowPrefsEvent>(&event).is_some() {
                self.show_settings = true;
                continue;
            }
            if downcast_event::<ShowHelpEvent>(&event).is_some() {
                self.show_help = true;
                continue;
            }
            if downcast_event::<ResetSettingsEvent>(&event).is_some() {
                self.reset_settings_pending = true;
                continue;
            }
            if downcast_event::<QuitEvent>(&event).is_some() {
                info!("Quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                continue;
            }

            trace!("Unhandled event: {}", (*event).type_name());
        }
    }

    /// Rename and rebuild the animation from a committed setup
    pub fn apply_setup(&mut self, setup: ApplySetupEvent) {
        if let Err(err) = self.load_animation(setup.dims, setup.frames) {
            self.report(err);
            return;
        }
        if let Err(err) = self.metadata.set_name(&setup.name) {
            self.report(err);
        }
        info!("Setup applied: '{}' {} x {} frames", self.metadata.name(), setup.dims, setup.frames);
    }

    /// Log an error and show it in the error window
    pub fn report(&mut self, err: EditorError) {
        warn!("{}", err);
        self.error_msg = Some(err.to_string());
    }

    /// Translate hotkeys into bus events. Skipped while a text field has focus.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let actions = ctx.input(|i| self.hotkey_handler.handle_input(i));
        for action in actions {
            let frames = self.sync.animation().frame_count();
            let layers = self.sync.dims().z;
            match action {
                HotkeyAction::ToggleHelp => self.show_help = !self.show_help,
                HotkeyAction::ToggleSettings => self.show_settings = !self.show_settings,
                HotkeyAction::NextFrame | HotkeyAction::PrevFrame => {
                    let up = action == HotkeyAction::NextFrame;
                    if let Some(idx) = step_index(self.sync.current_frame(), frames, up) {
                        self.event_bus.emit(SelectFrameEvent(idx));
                    }
                }
                HotkeyAction::NextLayer | HotkeyAction::PrevLayer => {
                    let up = action == HotkeyAction::NextLayer;
                    if let Some(idx) = step_index(self.sync.current_layer(), layers, up) {
                        self.event_bus.emit(SelectLayerEvent(idx));
                    }
                }
                HotkeyAction::ShowCube => self.event_bus.emit(SetDisplayModeEvent(DisplayMode::FullCube)),
                HotkeyAction::ShowLayer => {
                    self.event_bus.emit(SetDisplayModeEvent(DisplayMode::ActiveLayer))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use crate::config::PathConfig;
    use crate::entities::CubeDims;
    use clap::Parser;

    fn app(argv: &[&str]) -> EditorApp {
        let args = Args::try_parse_from(argv).unwrap();
        let mut app = EditorApp::default();
        app.init(&args, PathConfig::default());
        app
    }

    #[test]
    fn test_init_defaults() {
        let app = app(&["ledcube"]);
        assert_eq!(app.sync.dims(), CubeDims::cube(5));
        assert_eq!(app.sync.animation().frame_count(), 3);
        assert_eq!(app.sync.forwarded_frame(), Some(0));
        assert!(app.error_msg.is_none());
    }

    #[test]
    fn test_init_from_cli() {
        let app = app(&["ledcube", "--cube", "4x4x4", "-n", "2", "--name", "Rain", "--layer-mode"]);
        assert_eq!(app.sync.dims(), CubeDims::cube(4));
        assert_eq!(app.sync.animation().frame_count(), 2);
        assert_eq!(app.metadata.name(), "Rain");
        assert_eq!(app.metadata.dims(), CubeDims::cube(4));
        assert_eq!(app.sync.mode(), DisplayMode::ActiveLayer);
    }

    #[test]
    fn test_unsupported_cli_cube_falls_back() {
        let app = app(&["ledcube", "--cube", "4x4x20"]);
        assert_eq!(app.sync.dims(), CubeDims::cube(5));
        assert!(app.error_msg.as_deref().is_some_and(|m| m.starts_with("Invalid config: 4x4x20")));
    }

    #[test]
    fn test_panel_events_drive_synchronizer() {
        let ctx = egui::Context::default();
        let mut app = app(&["ledcube"]);

        app.event_bus.emit(ToggleLedEvent { x: 1, y: 2 });
        app.event_bus.emit(SelectFrameEvent(2));
        app.event_bus.emit(SetDurationEvent("250".into()));
        app.handle_events(&ctx);

        assert_eq!(app.sync.current_frame(), 2);
        assert_eq!(app.sync.animation().active_frame().duration(), 250);
        assert!(app.sync.animation().get_frame(0).unwrap().led(1, 2, 0).unwrap());
        assert_eq!(app.edit_count.get(), 1);
        assert!(app.error_msg.is_none());
    }

    #[test]
    fn test_bad_duration_reported() {
        let ctx = egui::Context::default();
        let mut app = app(&["ledcube"]);

        app.event_bus.emit(SetDurationEvent("fast".into()));
        app.handle_events(&ctx);
        assert!(app.error_msg.is_some());

        app.error_msg = None;
        app.event_bus.emit(SetDurationEvent("70000".into()));
        app.handle_events(&ctx);
        assert!(app.error_msg.as_deref().is_some_and(|m| m.contains("out of range")));
        assert_eq!(app.sync.animation().active_frame().duration(), 5);
    }

    #[test]
    fn test_file_menu_not_implemented() {
        let ctx = egui::Context::default();
        let mut app = app(&["ledcube"]);
        app.event_bus.emit(SaveAnimationEvent);
        app.handle_events(&ctx);
        assert_eq!(app.error_msg.as_deref(), Some("Saving animations is not implemented"));
    }

    #[test]
    fn test_apply_setup() {
        let ctx = egui::Context::default();
        let mut app = app(&["ledcube"]);
        app.event_bus.emit(ToggleLedEvent { x: 0, y: 0 });
        app.event_bus.emit(ApplySetupEvent {
            name: "Spiral".into(),
            dims: CubeDims::cube(8),
            frames: 4,
        });
        app.handle_events(&ctx);

        assert_eq!(app.sync.dims(), CubeDims::cube(8));
        assert_eq!(app.sync.animation().frame_count(), 4);
        assert_eq!(app.sync.animation().active_frame().lit_count(), 0);
        assert_eq!(app.metadata.name(), "Spiral");
        assert_eq!(app.settings.last_cube, CubeDims::cube(8));
    }

    #[test]
    fn test_apply_uneven_setup() {
        let ctx = egui::Context::default();
        let mut app = app(&["ledcube"]);
        let dialog = SetupDialog {
            name: "Tower".into(),
            x: 8,
            y: 8,
            z: 4,
            frames: 2,
        };
        app.event_bus.emit(dialog.validate().unwrap());
        app.handle_events(&ctx);

        assert!(app.error_msg.is_none());
        assert_eq!(app.sync.dims(), CubeDims::new(8, 8, 4));
        assert_eq!(app.sync.animation().frame_count(), 2);
        assert_eq!(app.sync.sink().dims(), Some(CubeDims::new(8, 8, 4)));
        assert_eq!(app.metadata.controller_count(), 5);
        assert!(app.sync.on_select_layer(3).is_ok());
        assert!(app.sync.on_select_layer(4).is_err());
    }
}
