//! Preferences window, hotkeys and persisted application settings

pub mod input_handler;
pub mod prefs;
pub mod prefs_events;

pub use input_handler::HotkeyHandler;
pub use prefs::{AppSettings, render_settings_window};
pub use prefs_events::*;
