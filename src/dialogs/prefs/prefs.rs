use eframe::egui;

use crate::core::DisplayMode;
use crate::core::event_bus::EventBus;
use crate::entities::CubeDims;

use super::prefs_events::ResetSettingsEvent;

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    General,
    UI,
    Preview,
}

impl SettingsCategory {
    const ALL: [SettingsCategory; 3] = [
        SettingsCategory::General,
        SettingsCategory::UI,
        SettingsCategory::Preview,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::General => "General",
            SettingsCategory::UI => "UI",
            SettingsCategory::Preview => "Preview",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Application settings
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub show_help: bool,
    pub dark_mode: bool,
    pub font_size: f32,
    pub led_button_size: f32, // Max LED button side in the layer editor
    pub show_axis_labels: bool,

    // Preview
    pub preview_led_radius: f32,
    pub default_display_mode: DisplayMode,

    // Startup cube (used when the CLI gives none)
    pub last_cube: CubeDims,
    pub last_frame_count: usize,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_help: false,
            dark_mode: true,
            font_size: 13.0,
            led_button_size: 36.0,
            show_axis_labels: true,
            preview_led_radius: 6.0,
            default_display_mode: DisplayMode::FullCube,
            last_cube: CubeDims::cube(5),
            last_frame_count: 3,
            selected_settings_category: Some("UI".to_string()),
        }
    }
}

impl AppSettings {
    /// Apply theme and font size to the egui context
    pub fn apply_style(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        ctx.style_mut(|style| {
            for font_id in style.text_styles.values_mut() {
                font_id.size = self.font_size;
            }
        });
    }
}

/// Render General settings category
fn render_general_settings(ui: &mut egui::Ui, settings: &mut AppSettings, event_bus: Option<&EventBus>) {
    ui.heading("Startup");
    ui.add_space(8.0);
    ui.label(format!(
        "Cube: {}  Frames: {}",
        settings.last_cube, settings.last_frame_count
    ));
    ui.label("Updated from Animation → Setup. The --cube and --frames flags override it.");

    ui.add_space(16.0);
    if ui.button("Reset to defaults").clicked()
        && let Some(bus) = event_bus
    {
        bus.emit(ResetSettingsEvent);
    }
}

/// Render UI settings category
fn render_ui_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=18.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.label("LED Button Size:");
    ui.add(
        egui::Slider::new(&mut settings.led_button_size, 16.0..=64.0)
            .suffix(" px")
            .step_by(2.0),
    );
    ui.add_space(16.0);

    ui.checkbox(&mut settings.dark_mode, "Dark Mode");
    ui.checkbox(&mut settings.show_axis_labels, "Layer editor axis labels");
}

/// Render Preview settings category
fn render_preview_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Preview");
    ui.add_space(8.0);

    ui.label("LED Radius:");
    ui.add(
        egui::Slider::new(&mut settings.preview_led_radius, 2.0..=16.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.label("Display mode on startup:");
    ui.horizontal(|ui| {
        for mode in [DisplayMode::FullCube, DisplayMode::ActiveLayer] {
            ui.radio_value(&mut settings.default_display_mode, mode, mode.label());
        }
    });
}

/// Render settings window
pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    event_bus: Option<&EventBus>,
) {
    let mut selected = settings
        .selected_settings_category
        .as_deref()
        .and_then(SettingsCategory::from_str)
        .unwrap_or(SettingsCategory::UI);

    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([520.0, 360.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Left panel: category list
                ui.vertical(|ui| {
                    ui.set_width(120.0);
                    ui.add_space(4.0);
                    for category in SettingsCategory::ALL {
                        if ui.selectable_label(selected == category, category.as_str()).clicked() {
                            selected = category;
                        }
                    }
                });

                ui.separator();

                // Right panel: content for selected category
                ui.vertical(|ui| {
                    ui.add_space(8.0);
                    match selected {
                        SettingsCategory::General => render_general_settings(ui, settings, event_bus),
                        SettingsCategory::UI => render_ui_settings(ui, settings),
                        SettingsCategory::Preview => render_preview_settings(ui, settings),
                    }
                });
            });
        });

    settings.selected_settings_category = Some(selected.as_str().to_string());
}
