//! Help window contents.
//!
//! Panels implement [`HelpProvider`]; global hotkeys are listed for every
//! context.

use eframe::egui;

/// Single help entry (key binding + description)
#[derive(Clone, Debug)]
pub struct HelpEntry {
    pub key: &'static str,
    pub desc: &'static str,
}

impl HelpEntry {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self { key, desc }
    }
}

/// Trait for panels that provide help
pub trait HelpProvider {
    fn help_title(&self) -> &'static str;
    fn help_entries(&self) -> &'static [HelpEntry];
}

/// Hotkeys available everywhere (outside text fields)
pub const GLOBAL_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("F12", "Toggle Preferences"),
    HelpEntry::new("PageUp / PageDown", "Next / previous frame"),
    HelpEntry::new("Up / Down", "Next / previous layer"),
    HelpEntry::new("C", "Preview: full cube"),
    HelpEntry::new("L", "Preview: active layer"),
];

pub const EDITOR_HELP: &[HelpEntry] = &[
    HelpEntry::new("Left Click", "Toggle LED"),
    HelpEntry::new("All On / All Off", "Fill active layer"),
];

pub const PREVIEW_HELP: &[HelpEntry] = &[
    HelpEntry::new("Left Drag", "Orbit"),
    HelpEntry::new("Mouse Wheel", "Zoom"),
    HelpEntry::new("Double Click", "Reset view"),
];

/// Render the help window
pub fn render_help_window(ctx: &egui::Context, open: &mut bool, sections: &[&dyn HelpProvider]) {
    egui::Window::new("Help")
        .id(egui::Id::new("help_window"))
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            render_section(ui, "Global", GLOBAL_HELP);
            for section in sections {
                ui.add_space(8.0);
                render_section(ui, section.help_title(), section.help_entries());
            }
        });
}

fn render_section(ui: &mut egui::Ui, title: &str, entries: &[HelpEntry]) {
    ui.strong(title);
    egui::Grid::new(("help_grid", title))
        .num_columns(2)
        .spacing([16.0, 2.0])
        .show(ui, |ui| {
            for entry in entries {
                ui.monospace(entry.key);
                ui.label(entry.desc);
                ui.end_row();
            }
        });
}
