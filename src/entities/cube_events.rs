//! Animation model events.
//!
//! These travel upward on the [`EventBus`](crate::core::event_bus::EventBus):
//! the model and the synchronizer emit them, UI panels poll them to refresh.
//!
//! ## [`LedChangedEvent`]
//! One LED changed state. Emitted only on an actual transition, never for a
//! redundant write.
//!
//! ## [`FrameChangedEvent`]
//! The active frame moved. Controls refresh their layer list and duration
//! from the new frame.

use super::dims::CubeDims;

/// LED at (x, y, z) of the active frame changed to `state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedChangedEvent {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub state: bool,
}

impl LedChangedEvent {
    pub const fn new(x: usize, y: usize, z: usize, state: bool) -> Self {
        Self { x, y, z, state }
    }
}

/// Emitted when the active frame changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameChangedEvent {
    pub old_frame: usize,
    pub new_frame: usize,
}

/// Emitted when the active layer of a frame changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerChangedEvent {
    pub frame: usize,
    pub old_layer: usize,
    pub new_layer: usize,
}

/// Emitted after a frame's duration was set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationChangedEvent {
    pub frame: usize,
    pub duration_ms: u16,
}

/// Emitted after the whole sequence was rebuilt for new dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeResizedEvent {
    pub dims: CubeDims,
    pub frames: usize,
}
