//! Application module - EditorApp and related functionality.
//!
//! - `events` - event bus handling and hotkeys
//! - `tabs` - dock tab rendering and the egui_dock TabViewer
//! - `run` - eframe::App implementation

mod events;
mod run;
mod tabs;

pub use tabs::DockTabs;

use std::cell::Cell;
use std::rc::Rc;

use egui_dock::DockState;
use log::{info, warn};

use crate::cli::Args;
use crate::config;
use crate::core::event_bus::{CubeEventEmitter, EventBus};
use crate::core::{DisplayMode, Synchronizer};
use crate::dialogs::prefs::{AppSettings, HotkeyHandler};
use crate::dialogs::setup::SetupDialog;
use crate::entities::{AnimationMetadata, CubeDims, LedChangedEvent};
use crate::widgets::controls::ControlsState;
use crate::widgets::preview::CubePreview;
use crate::widgets::status::StatusBar;

/// Dock tab identifiers for the main UI layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DockTab {
    Controls,
    LayerEditor,
    Preview,
}

/// Main application state.
///
/// Only settings and the dock layout persist; the animation itself is
/// rebuilt on every start.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct EditorApp {
    /// Model + preview, driven through the synchronizer
    #[serde(skip)]
    pub sync: Synchronizer<CubePreview>,
    #[serde(skip)]
    pub metadata: AnimationMetadata,
    pub settings: AppSettings,
    #[serde(default = "EditorApp::default_dock_state")]
    pub dock_state: DockState<DockTab>,
    /// Global event bus for application-wide events
    #[serde(skip)]
    pub event_bus: EventBus,
    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub controls_state: ControlsState,
    #[serde(skip)]
    pub setup_dialog: Option<SetupDialog>,
    #[serde(skip)]
    pub hotkey_handler: HotkeyHandler,
    #[serde(skip)]
    pub show_help: bool,
    #[serde(skip)]
    pub show_settings: bool,
    #[serde(skip)]
    pub reset_settings_pending: bool,
    #[serde(skip)]
    pub error_msg: Option<String>,
    /// LED changes forwarded since startup (bus subscriber)
    #[serde(skip)]
    pub edit_count: Rc<Cell<u64>>,
    #[serde(skip)]
    pub path_config: config::PathConfig,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            sync: Synchronizer::new(CubePreview::new()),
            metadata: AnimationMetadata::default(),
            settings: AppSettings::default(),
            dock_state: EditorApp::default_dock_state(),
            event_bus: EventBus::new(),
            status_bar: StatusBar::new(),
            controls_state: ControlsState::default(),
            setup_dialog: None,
            hotkey_handler: HotkeyHandler::new(),
            show_help: false,
            show_settings: false,
            reset_settings_pending: false,
            error_msg: None,
            edit_count: Rc::new(Cell::new(0)),
            path_config: config::PathConfig::default(),
        }
    }
}

impl EditorApp {
    /// Default dock state with standard layout.
    pub fn default_dock_state() -> DockState<DockTab> {
        Self::build_dock_state(0.22, 0.5)
    }

    /// Controls on the left, layer editor and preview side by side.
    pub fn build_dock_state(controls_width: f32, editor_split: f32) -> DockState<DockTab> {
        use egui_dock::NodeIndex;

        let mut dock_state = DockState::new(vec![DockTab::LayerEditor]);
        let [_controls, editor] = dock_state.main_surface_mut().split_left(
            NodeIndex::root(),
            controls_width,
            vec![DockTab::Controls],
        );
        let _ = dock_state
            .main_surface_mut()
            .split_right(editor, editor_split, vec![DockTab::Preview]);
        dock_state
    }

    /// Wire runtime state and load the startup cube.
    ///
    /// Cube/frames/name come from the CLI first, then from the last setup
    /// stored in settings.
    pub fn init(&mut self, args: &Args, path_config: config::PathConfig) {
        self.path_config = path_config;
        self.show_help = self.settings.show_help;

        let emitter = CubeEventEmitter::from_emitter(self.event_bus.emitter());
        self.sync.set_event_emitter(emitter);

        let counter = Rc::clone(&self.edit_count);
        self.event_bus
            .subscribe::<LedChangedEvent, _>(move |_| counter.set(counter.get() + 1));

        let dims = args.cube.unwrap_or(self.settings.last_cube);
        let frames = args
            .frames
            .map(usize::from)
            .unwrap_or(self.settings.last_frame_count)
            .max(1);
        if let Err(e) = self.load_animation(dims, frames) {
            warn!("Startup cube {} rejected: {}", dims, e);
            self.error_msg = Some(e.to_string());
            let fallback = AppSettings::default();
            if let Err(e) = self.load_animation(fallback.last_cube, fallback.last_frame_count) {
                self.error_msg = Some(e.to_string());
            }
        }

        if let Some(name) = &args.name
            && let Err(e) = self.metadata.set_name(name)
        {
            warn!("Name rejected: {}", e);
            self.error_msg = Some(e.to_string());
        }

        let mode = if args.layer_mode {
            DisplayMode::ActiveLayer
        } else {
            self.settings.default_display_mode
        };
        self.sync.set_display_mode(mode);

        // Startup notifications are already reflected in the UI
        self.edit_count.set(0);
        let _ = self.event_bus.poll();
        info!(
            "Editor ready: {} x {} frames, {}",
            self.sync.dims(),
            self.sync.animation().frame_count(),
            mode.label()
        );
    }

    /// Rebuild the animation for `dims` through the preview's config list.
    pub fn load_animation(&mut self, dims: CubeDims, frames: usize) -> crate::error::Result<()> {
        self.sync.load_cube(&dims.config(), frames, false)?;
        self.metadata.set_dims(dims);
        self.settings.last_cube = dims;
        self.settings.last_frame_count = frames;
        self.controls_state.invalidate();
        Ok(())
    }
}
