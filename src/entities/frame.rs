//! One animation frame: a stack of layers plus a display duration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cube_events::LedChangedEvent;
use super::dims::CubeDims;
use super::layer::{LayerGrid, LedState};
use crate::error::{EditorError, Result};

/// Frame duration when nothing else was set (ms)
pub const DEFAULT_DURATION_MS: u16 = 5;
/// Longest frame duration (ms)
pub const MAX_DURATION_MS: i64 = u16::MAX as i64;

/// Complete cube snapshot: `z` layers, a duration and the active layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameGrid {
    layers: Vec<LayerGrid>,
    duration_ms: u16,
    current_layer: usize,
}

impl FrameGrid {
    /// Fresh frame with every LED off
    pub fn new(dims: CubeDims) -> Self {
        Self::with_duration(dims, DEFAULT_DURATION_MS)
    }

    /// Frame with at least one layer, so there is always an active layer
    pub fn with_duration(dims: CubeDims, duration_ms: u16) -> Self {
        Self {
            layers: (0..dims.z.max(1)).map(|z| LayerGrid::new(z, dims.x, dims.y)).collect(),
            duration_ms,
            current_layer: 0,
        }
    }

    pub fn get_layers(&self) -> &[LayerGrid] {
        &self.layers
    }

    pub fn layer(&self, z: usize) -> Result<&LayerGrid> {
        self.layers
            .get(z)
            .ok_or_else(|| EditorError::index("layer", z, self.layers.len()))
    }

    pub fn layer_mut(&mut self, z: usize) -> Result<&mut LayerGrid> {
        let len = self.layers.len();
        self.layers
            .get_mut(z)
            .ok_or_else(|| EditorError::index("layer", z, len))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn current_layer(&self) -> usize {
        self.current_layer
    }

    /// Make layer `idx` the active one. Index unchanged on error.
    pub fn select_layer(&mut self, idx: usize) -> Result<()> {
        if idx >= self.layers.len() {
            return Err(EditorError::index("layer", idx, self.layers.len()));
        }
        self.current_layer = idx;
        Ok(())
    }

    pub fn active_layer(&self) -> &LayerGrid {
        &self.layers[self.current_layer]
    }

    pub fn active_layer_mut(&mut self) -> &mut LayerGrid {
        &mut self.layers[self.current_layer]
    }

    /// Duration in milliseconds
    pub fn duration(&self) -> u16 {
        self.duration_ms
    }

    /// Set the duration. Fails outside [0, 65535].
    pub fn set_duration(&mut self, ms: i64) -> Result<()> {
        if !(0..=MAX_DURATION_MS).contains(&ms) {
            return Err(EditorError::Range {
                what: "ms",
                value: ms,
                min: 0,
                max: MAX_DURATION_MS,
            });
        }
        self.duration_ms = ms as u16;
        Ok(())
    }

    /// Set the duration from a dynamic value. Non-integers are a type error.
    pub fn set_duration_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Number(n) if n.is_i64() => self.set_duration(n.as_i64().unwrap_or_default()),
            // u64 beyond i64::MAX
            Value::Number(n) if n.is_u64() => self.set_duration(i64::MAX),
            other => Err(EditorError::Type {
                expected: "integer",
                got: describe(other),
            }),
        }
    }

    pub fn led(&self, x: usize, y: usize, z: usize) -> Result<bool> {
        self.layer(z)?.get(x, y)
    }

    /// Set LED (x, y, z). `None` when the LED already had `state`.
    pub fn set_led(&mut self, x: usize, y: usize, z: usize, state: bool) -> Result<Option<LedChangedEvent>> {
        self.layer_mut(z)?.set(x, y, state)
    }

    /// Every LED of every layer, layer by layer
    pub fn leds(&self) -> impl Iterator<Item = &LedState> {
        self.layers.iter().flat_map(|layer| layer.get_leds().iter())
    }

    pub fn lit_count(&self) -> usize {
        self.layers.iter().map(LayerGrid::lit_count).sum()
    }
}

/// Parse a duration typed by the user. Anything but an integer is a type error.
pub fn parse_duration(text: &str) -> Result<i64> {
    let text = text.trim();
    text.parse::<i64>().map_err(|_| EditorError::Type {
        expected: "integer",
        got: format!("'{}'", text),
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {}", b),
        Value::Number(n) => format!("float {}", n),
        Value::String(s) => format!("string '{}'", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
