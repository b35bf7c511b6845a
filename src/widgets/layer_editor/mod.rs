//! Layer editor widget
//!
//! Grid of LED buttons for the active layer of the active frame

mod layer_editor;
pub mod layer_editor_ui;
pub mod layer_events;

pub use layer_editor::{LayerEditorActions, axis_label_text, fit_button_size, row_to_y};
pub use layer_editor_ui::render;

use crate::help::{EDITOR_HELP, HelpEntry, HelpProvider};

/// Help section for the layer editor tab
pub struct LayerEditorHelp;

impl HelpProvider for LayerEditorHelp {
    fn help_title(&self) -> &'static str {
        "Layer Editor"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        EDITOR_HELP
    }
}
