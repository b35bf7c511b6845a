//! UI Widgets - modular, reusable UI components
//!
//! Each widget is self-contained and communicates via EventBus

pub mod controls;
pub mod layer_editor;
pub mod menu;
pub mod preview;
pub mod status;
