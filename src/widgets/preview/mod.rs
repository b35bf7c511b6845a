//! Preview widget - painted 3D view of the cube
//!
//! Implements the synchronizer's preview sink and draws with egui's painter.

mod cube_preview;
mod preview_ui;

pub use cube_preview::{CubePreview, PreviewCamera, Shown};
pub use preview_ui::render;

use crate::help::{HelpEntry, HelpProvider, PREVIEW_HELP};

impl HelpProvider for CubePreview {
    fn help_title(&self) -> &'static str {
        "Preview"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        PREVIEW_HELP
    }
}
