//! Ordered frame sequence with the active-frame cursor.
//!
//! # Lifecycle
//!
//! `set_cube_size()` discards every frame and builds new ones, so all frames
//! always share one [`CubeDims`]. There is no partial resize: LED states do
//! not survive a resize.
//!
//! # Events
//!
//! `select_frame()` emits [`FrameChangedEvent`] through the attached
//! [`CubeEventEmitter`]; `set_cube_size()` emits [`CubeResizedEvent`].

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::cube_events::{CubeResizedEvent, FrameChangedEvent};
use super::dims::CubeDims;
use super::frame::FrameGrid;
use crate::core::event_bus::CubeEventEmitter;
use crate::error::{EditorError, Result};

/// The animation: frames in playback order plus the active frame index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationSequence {
    frames: Vec<FrameGrid>,
    dims: CubeDims,
    current_frame: usize,
    #[serde(skip)]
    emitter: CubeEventEmitter,
}

impl Default for AnimationSequence {
    fn default() -> Self {
        Self::new(CubeDims::default(), 1)
    }
}

impl AnimationSequence {
    pub fn new(dims: CubeDims, frame_count: usize) -> Self {
        let mut seq = Self {
            frames: Vec::new(),
            dims,
            current_frame: 0,
            emitter: CubeEventEmitter::detached(),
        };
        seq.rebuild(dims, frame_count);
        seq
    }

    /// Attach the event emitter used for frame/resize notifications
    pub fn set_event_emitter(&mut self, emitter: CubeEventEmitter) {
        self.emitter = emitter;
    }

    /// Rebuild the whole sequence for new dimensions.
    ///
    /// Axis ranges are validated by the caller; zero sizes are raised to 1
    /// and `frame_count` to at least 1 so every frame has an active layer.
    pub fn set_cube_size(&mut self, x: usize, y: usize, z: usize, frame_count: usize) {
        self.rebuild(CubeDims::new(x, y, z), frame_count);
        info!("Cube resized to {} with {} frame(s)", self.dims, self.frames.len());
        self.emitter.emit(CubeResizedEvent {
            dims: self.dims,
            frames: self.frames.len(),
        });
    }

    fn rebuild(&mut self, dims: CubeDims, frame_count: usize) {
        let dims = CubeDims::new(dims.x.max(1), dims.y.max(1), dims.z.max(1));
        let frame_count = frame_count.max(1);
        self.dims = dims;
        self.frames = (0..frame_count).map(|_| FrameGrid::new(dims)).collect();
        self.current_frame = 0;
    }

    pub fn dims(&self) -> CubeDims {
        self.dims
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Make frame `idx` active. Index unchanged on error.
    pub fn select_frame(&mut self, idx: usize) -> Result<()> {
        if idx >= self.frames.len() {
            return Err(EditorError::index("frame", idx, self.frames.len()));
        }
        let old_frame = self.current_frame;
        self.current_frame = idx;
        debug!("Frame selected: {} -> {}", old_frame, idx);
        self.emitter.emit(FrameChangedEvent {
            old_frame,
            new_frame: idx,
        });
        Ok(())
    }

    pub fn get_frame(&self, idx: usize) -> Result<&FrameGrid> {
        self.frames
            .get(idx)
            .ok_or_else(|| EditorError::index("frame", idx, self.frames.len()))
    }

    pub fn frame_mut(&mut self, idx: usize) -> Result<&mut FrameGrid> {
        let len = self.frames.len();
        self.frames
            .get_mut(idx)
            .ok_or_else(|| EditorError::index("frame", idx, len))
    }

    pub fn active_frame(&self) -> &FrameGrid {
        &self.frames[self.current_frame]
    }

    pub fn active_frame_mut(&mut self) -> &mut FrameGrid {
        &mut self.frames[self.current_frame]
    }

    /// Sum of all frame durations (ms)
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.duration())).sum()
    }
}
