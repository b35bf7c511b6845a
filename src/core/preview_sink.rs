//! Preview sink interface.
//!
//! The synchronizer drives the 3D preview only through [`PreviewSink`]. The
//! sink keeps no memory of what it is not displaying, so every display-mode
//! or frame switch is followed by a full repaint from the model.

use std::collections::BTreeSet;

use crate::entities::dims::{CubeDims, MAX_AXIS, MIN_AXIS};
use crate::error::{EditorError, Result};

/// Consumer of LED paint calls.
pub trait PreviewSink {
    /// `"XxYxZ"` configs this sink can display
    fn config_list(&self) -> BTreeSet<String>;

    /// (Re)initialize for the given config
    fn load_cube(&mut self, config: &str) -> Result<()>;

    /// Paint one LED
    fn set_led(&mut self, x: usize, y: usize, z: usize, state: bool);

    /// Display the whole cube
    fn show_cube(&mut self);

    /// Display only layer `z`
    fn show_layer(&mut self, z: usize);
}

/// Every `XxYxZ` config with each axis in [MIN_AXIS, MAX_AXIS].
pub fn cube_configs() -> BTreeSet<String> {
    let mut configs = BTreeSet::new();
    for x in MIN_AXIS..=MAX_AXIS {
        for y in MIN_AXIS..=MAX_AXIS {
            for z in MIN_AXIS..=MAX_AXIS {
                configs.insert(CubeDims::new(x, y, z).config());
            }
        }
    }
    configs
}

/// Configuration error listing the valid configs in size order.
pub fn unsupported_config(config: &str, valid: &BTreeSet<String>) -> EditorError {
    let mut sorted: Vec<(CubeDims, &String)> = valid
        .iter()
        .filter_map(|c| c.parse::<CubeDims>().ok().map(|d| (d, c)))
        .collect();
    sorted.sort_by_key(|(d, _)| (d.x, d.y, d.z));
    EditorError::Configuration {
        config: config.to_string(),
        valid: sorted
            .iter()
            .map(|(_, c)| c.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// One recorded sink call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
    LoadCube(String),
    SetLed { x: usize, y: usize, z: usize, state: bool },
    ShowCube,
    ShowLayer(usize),
}

/// Headless sink that records every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded calls
    pub fn take(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    /// Only the `SetLed` calls, as tuples
    pub fn set_leds(&self) -> Vec<(usize, usize, usize, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                SinkCall::SetLed { x, y, z, state } => Some((x, y, z, state)),
                _ => None,
            })
            .collect()
    }
}

impl PreviewSink for RecordingSink {
    fn config_list(&self) -> BTreeSet<String> {
        cube_configs()
    }

    fn load_cube(&mut self, config: &str) -> Result<()> {
        let valid = self.config_list();
        if !valid.contains(config) {
            return Err(unsupported_config(config, &valid));
        }
        self.calls.push(SinkCall::LoadCube(config.to_string()));
        Ok(())
    }

    fn set_led(&mut self, x: usize, y: usize, z: usize, state: bool) {
        self.calls.push(SinkCall::SetLed { x, y, z, state });
    }

    fn show_cube(&mut self) {
        self.calls.push(SinkCall::ShowCube);
    }

    fn show_layer(&mut self, z: usize) {
        self.calls.push(SinkCall::ShowLayer(z));
    }
}
