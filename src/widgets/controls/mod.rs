//! Controls panel widget
//!
//! Frame and layer selection, frame duration and preview display mode

mod controls;
pub mod controls_events;
pub mod controls_ui;

pub use controls::{ControlsActions, ControlsState, index_label, step_buttons_enabled, step_index};
pub use controls_ui::render;
