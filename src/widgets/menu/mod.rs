//! Menu bar widget

pub mod menu_events;
pub mod menu_ui;

pub use menu_ui::{MenuActions, render};
