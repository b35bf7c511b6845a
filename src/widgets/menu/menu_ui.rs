use eframe::egui;

use crate::core::event_bus::{BoxedEvent, Event};
use crate::widgets::menu::menu_events::*;

/// Menu bar result - all actions via events
#[derive(Default)]
pub struct MenuActions {
    pub events: Vec<BoxedEvent>,
}

impl MenuActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }
}

/// Render the top menu bar
pub fn render(ctx: &egui::Context) -> MenuActions {
    let mut actions = MenuActions::new();
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                item(ui, &mut actions, "New", NewAnimationEvent);
                item(ui, &mut actions, "Open...", OpenAnimationEvent);
                ui.separator();
                item(ui, &mut actions, "Save", SaveAnimationEvent);
                item(ui, &mut actions, "Save As...", SaveAnimationAsEvent);
                ui.separator();
                item(ui, &mut actions, "Quit", QuitEvent);
            });
            ui.menu_button("View", |ui| {
                item(ui, &mut actions, "Library", ToggleLibraryEvent);
                item(ui, &mut actions, "Preferences  F12", ShowPrefsEvent);
            });
            ui.menu_button("Animation", |ui| {
                item(ui, &mut actions, "Setup...", ShowSetupEvent);
            });
            ui.menu_button("Help", |ui| {
                item(ui, &mut actions, "Hotkeys  F1", ShowHelpEvent);
            });
        });
    });
    actions
}

fn item<E: Event>(ui: &mut egui::Ui, actions: &mut MenuActions, label: &str, event: E) {
    if ui.button(label).clicked() {
        actions.send(event);
        ui.close();
    }
}
