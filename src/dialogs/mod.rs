//! Dialog windows: preferences and animation setup

pub mod prefs;
pub mod setup;
