//! Synchronizer: UI requests in, model updates and preview paints out.
//!
//! **Architecture**: the synchronizer owns the [`AnimationSequence`] and the
//! [`PreviewSink`]. Panels never touch either directly; they call `on_*`
//! methods and read back through accessors.
//!
//! # Forwarded frame
//!
//! LED changes reach the preview only from the *forwarded* frame. The index
//! is swapped inside `on_select_frame()`/`load_cube()` before any further
//! change can happen, so a change made to a previously active frame is never
//! painted and a change to the new one is never dropped.
//!
//! # Display mode
//!
//! - `FullCube`: every LED of the active frame is shown
//! - `ActiveLayer`: only the active layer; other layers count as dark
//!
//! Entering a mode, switching frame, or switching layer in `ActiveLayer`
//! mode repaints the visible part from the model, since the sink forgets
//! anything it is not displaying.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event_bus::CubeEventEmitter;
use super::preview_sink::{PreviewSink, unsupported_config};
use crate::entities::{
    AnimationSequence, CubeDims, DurationChangedEvent, FrameChangedEvent, LayerChangedEvent,
    LedChangedEvent,
};
use crate::error::{EditorError, Result};

/// What the preview shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    FullCube,
    ActiveLayer,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::FullCube => "Full cube",
            DisplayMode::ActiveLayer => "Active layer",
        }
    }
}

/// Emitted when the display mode changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayModeChangedEvent(pub DisplayMode);

/// Mediates panel requests against the model and feeds the preview.
pub struct Synchronizer<S: PreviewSink> {
    animation: AnimationSequence,
    sink: S,
    mode: DisplayMode,
    /// Frame whose LED changes are forwarded upward and to the sink
    forwarded_frame: Option<usize>,
    emitter: CubeEventEmitter,
}

impl<S: PreviewSink + Default> Default for Synchronizer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: PreviewSink> Synchronizer<S> {
    /// Wrap a sink. Nothing is forwarded until `load_cube()` succeeds.
    pub fn new(sink: S) -> Self {
        Self {
            animation: AnimationSequence::default(),
            sink,
            mode: DisplayMode::default(),
            forwarded_frame: None,
            emitter: CubeEventEmitter::detached(),
        }
    }

    /// Attach the emitter for upward notifications (shared with the model)
    pub fn set_event_emitter(&mut self, emitter: CubeEventEmitter) {
        self.animation.set_event_emitter(emitter.clone());
        self.emitter = emitter;
    }

    pub fn animation(&self) -> &AnimationSequence {
        &self.animation
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn forwarded_frame(&self) -> Option<usize> {
        self.forwarded_frame
    }

    pub fn dims(&self) -> CubeDims {
        self.animation.dims()
    }

    pub fn current_frame(&self) -> usize {
        self.animation.current_frame()
    }

    pub fn current_layer(&self) -> usize {
        self.animation.active_frame().current_layer()
    }

    // ========== Cube lifecycle ==========

    /// Load a cube config into the sink and rebuild the animation.
    ///
    /// `custom` configurations are not supported. A config the sink does not
    /// list is a configuration error; the model is left untouched on error.
    pub fn load_cube(&mut self, config: &str, frames: usize, custom: bool) -> Result<()> {
        if custom {
            return Err(EditorError::NotImplemented("Custom cube configuration"));
        }
        let valid = self.sink.config_list();
        if !valid.contains(config) {
            warn!("Rejected cube config '{}'", config);
            return Err(unsupported_config(config, &valid));
        }
        let dims: CubeDims = config.parse()?;
        self.sink.load_cube(config)?;

        let old_frame = self.animation.current_frame();
        self.animation.set_cube_size(dims.x, dims.y, dims.z, frames);
        self.forwarded_frame = Some(self.animation.current_frame());
        info!("Loaded cube {} with {} frame(s)", config, self.animation.frame_count());

        self.emitter.emit(FrameChangedEvent {
            old_frame,
            new_frame: self.animation.current_frame(),
        });
        self.show_mode_in_sink();
        self.repaint();
        Ok(())
    }

    // ========== Selection ==========

    /// Switch the active frame, re-target forwarding and repaint.
    ///
    /// Before a cube is loaded only the model cursor moves.
    pub fn on_select_frame(&mut self, idx: usize) -> Result<()> {
        self.animation.select_frame(idx)?;
        let Some(previous) = self.forwarded_frame else {
            debug!("Frame {} selected before any cube was loaded", idx);
            return Ok(());
        };
        self.forwarded_frame = Some(idx);
        debug!("Forwarding switched from frame {} to {}", previous, idx);

        // The new frame keeps its own active layer
        if self.mode == DisplayMode::ActiveLayer {
            let z = self.current_layer();
            self.sink.show_layer(z);
        }
        self.repaint();
        Ok(())
    }

    /// Switch the active layer of the active frame.
    pub fn on_select_layer(&mut self, idx: usize) -> Result<()> {
        let frame = self.animation.current_frame();
        let old_layer = self.current_layer();
        self.animation.active_frame_mut().select_layer(idx)?;
        self.emitter.emit(LayerChangedEvent {
            frame,
            old_layer,
            new_layer: idx,
        });
        if self.mode == DisplayMode::ActiveLayer && old_layer != idx {
            self.sink.show_layer(idx);
            self.repaint();
        }
        Ok(())
    }

    /// Switch display mode. Returns false if already in `mode`.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        if self.mode == mode {
            return false;
        }
        info!("Display mode: {} -> {}", self.mode.label(), mode.label());
        self.mode = mode;
        self.emitter.emit(DisplayModeChangedEvent(mode));
        self.show_mode_in_sink();
        self.repaint();
        true
    }

    // ========== Duration ==========

    pub fn on_set_duration(&mut self, ms: i64) -> Result<()> {
        self.animation.active_frame_mut().set_duration(ms)?;
        self.emit_duration();
        Ok(())
    }

    /// Set duration from a dynamic value (non-integers are a type error)
    pub fn on_set_duration_value(&mut self, value: &Value) -> Result<()> {
        self.animation.active_frame_mut().set_duration_value(value)?;
        self.emit_duration();
        Ok(())
    }

    fn emit_duration(&self) {
        let frame = self.animation.active_frame();
        self.emitter.emit(DurationChangedEvent {
            frame: self.animation.current_frame(),
            duration_ms: frame.duration(),
        });
    }

    // ========== LED edits ==========

    /// Set LED (x, y) of the active layer of the active frame.
    ///
    /// Returns the change, or `None` when the LED already had `state`.
    pub fn on_led_toggled(&mut self, x: usize, y: usize, state: bool) -> Result<Option<LedChangedEvent>> {
        let frame = self.animation.current_frame();
        let change = self.animation.active_frame_mut().active_layer_mut().set(x, y, state)?;
        if let Some(ev) = change {
            self.forward(frame, ev);
        }
        Ok(change)
    }

    /// Flip LED (x, y) of the active layer (a click in the layer editor)
    pub fn toggle_led(&mut self, x: usize, y: usize) -> Result<LedChangedEvent> {
        let frame = self.animation.current_frame();
        let ev = self.animation.active_frame_mut().active_layer_mut().toggle(x, y)?;
        self.forward(frame, ev);
        Ok(ev)
    }

    /// Set every LED of the active layer
    pub fn fill_active_layer(&mut self, state: bool) -> usize {
        let frame = self.animation.current_frame();
        let changes = self.animation.active_frame_mut().active_layer_mut().fill(state);
        for ev in &changes {
            self.forward(frame, *ev);
        }
        changes.len()
    }

    /// Set LED (x, y, z) of any frame.
    ///
    /// Only changes to the forwarded frame reach listeners and the sink.
    pub fn edit_frame(
        &mut self,
        frame: usize,
        x: usize,
        y: usize,
        z: usize,
        state: bool,
    ) -> Result<Option<LedChangedEvent>> {
        let change = self.animation.frame_mut(frame)?.set_led(x, y, z, state)?;
        if let Some(ev) = change {
            self.forward(frame, ev);
        }
        Ok(change)
    }

    /// Deliver a change from `frame` upward and, if visible, to the sink.
    fn forward(&mut self, frame: usize, ev: LedChangedEvent) {
        if self.forwarded_frame != Some(frame) {
            trace!("Change in frame {} not forwarded: {:?}", frame, ev);
            return;
        }
        trace!("LED ({}, {}, {}) -> {}", ev.x, ev.y, ev.z, ev.state);
        self.emitter.emit(ev);
        if self.is_visible(ev.z) {
            self.sink.set_led(ev.x, ev.y, ev.z, ev.state);
        }
    }

    fn is_visible(&self, z: usize) -> bool {
        match self.mode {
            DisplayMode::FullCube => true,
            DisplayMode::ActiveLayer => z == self.current_layer(),
        }
    }

    // ========== Sink repaint ==========

    fn show_mode_in_sink(&mut self) {
        match self.mode {
            DisplayMode::FullCube => self.sink.show_cube(),
            DisplayMode::ActiveLayer => {
                let z = self.current_layer();
                self.sink.show_layer(z);
            }
        }
    }

    /// Push the visible part of the forwarded frame to the sink.
    pub fn repaint(&mut self) {
        let Some(frame_idx) = self.forwarded_frame else {
            return;
        };
        let Ok(frame) = self.animation.get_frame(frame_idx) else {
            return;
        };
        let sink = &mut self.sink;
        match self.mode {
            DisplayMode::FullCube => {
                for led in frame.leds() {
                    sink.set_led(led.x, led.y, led.z, led.on);
                }
            }
            DisplayMode::ActiveLayer => {
                for led in frame.active_layer().get_leds() {
                    sink.set_led(led.x, led.y, led.z, led.on);
                }
            }
        }
        debug!("Repainted frame {} ({})", frame_idx, self.mode.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::{EventBus, downcast_event};
    use crate::core::preview_sink::{RecordingSink, SinkCall};
    use serde_json::json;

    fn loaded(config: &str, frames: usize) -> Synchronizer<RecordingSink> {
        let mut sync = Synchronizer::new(RecordingSink::new());
        sync.load_cube(config, frames, false).unwrap();
        sync.sink_mut().take();
        sync
    }

    #[test]
    fn test_nothing_forwarded_before_load() {
        let mut sync = Synchronizer::new(RecordingSink::new());
        assert_eq!(sync.forwarded_frame(), None);
        sync.on_led_toggled(0, 0, true).unwrap();
        assert!(sync.sink().calls.is_empty());
    }

    #[test]
    fn test_select_frame_before_load_does_not_forward() {
        let mut sync = Synchronizer::new(RecordingSink::new());
        sync.on_select_frame(0).unwrap();
        assert_eq!(sync.forwarded_frame(), None);

        sync.on_led_toggled(1, 1, true).unwrap();
        sync.set_display_mode(DisplayMode::ActiveLayer);
        assert!(sync.sink().set_leds().is_empty());
    }

    #[test]
    fn test_load_cube_paints_full_frame() {
        let mut sync = Synchronizer::new(RecordingSink::new());
        sync.load_cube("3x3x3", 2, false).unwrap();
        let calls = sync.sink_mut().take();
        assert_eq!(calls[0], SinkCall::LoadCube("3x3x3".into()));
        assert_eq!(calls[1], SinkCall::ShowCube);
        assert_eq!(calls.len(), 2 + 27);
        assert_eq!(sync.forwarded_frame(), Some(0));
        assert_eq!(sync.animation().frame_count(), 2);
    }

    #[test]
    fn test_load_cube_errors_leave_model() {
        let mut sync = loaded("4x4x4", 2);
        assert!(matches!(
            sync.load_cube("4x4x4", 1, true),
            Err(EditorError::NotImplemented(_))
        ));
        assert!(matches!(
            sync.load_cube("4x4x17", 1, false),
            Err(EditorError::Configuration { .. })
        ));
        assert_eq!(sync.dims(), CubeDims::cube(4));
        assert_eq!(sync.animation().frame_count(), 2);
        assert!(sync.sink().calls.is_empty());
    }

    #[test]
    fn test_set_unchanged_is_silent() {
        let mut sync = loaded("2x2x2", 1);
        assert_eq!(sync.on_led_toggled(1, 1, false).unwrap(), None);
        assert!(sync.sink().calls.is_empty());

        sync.on_led_toggled(1, 1, true).unwrap();
        sync.on_led_toggled(1, 1, true).unwrap();
        assert_eq!(sync.sink().set_leds(), vec![(1, 1, 0, true)]);
    }

    #[test]
    fn test_active_layer_gates_other_layers() {
        let mut sync = loaded("3x3x3", 1);
        sync.set_display_mode(DisplayMode::ActiveLayer);
        sync.sink_mut().take();

        // Layer 0 is visible
        sync.on_led_toggled(0, 0, true).unwrap();
        // Layer 2 is stored but not painted
        sync.edit_frame(0, 1, 1, 2, true).unwrap();
        assert_eq!(sync.sink().set_leds(), vec![(0, 0, 0, true)]);
        assert!(sync.animation().active_frame().led(1, 1, 2).unwrap());
    }

    #[test]
    fn test_select_layer_in_layer_mode_repaints() {
        let mut sync = loaded("3x3x3", 1);
        sync.edit_frame(0, 2, 2, 1, true).unwrap();
        sync.set_display_mode(DisplayMode::ActiveLayer);
        sync.sink_mut().take();

        sync.on_select_layer(1).unwrap();
        let calls = sync.sink_mut().take();
        assert_eq!(calls[0], SinkCall::ShowLayer(1));
        assert_eq!(calls.len(), 1 + 9);
        assert!(calls.contains(&SinkCall::SetLed { x: 2, y: 2, z: 1, state: true }));
    }

    #[test]
    fn test_select_layer_in_cube_mode_no_repaint() {
        let mut sync = loaded("3x3x3", 2);
        sync.on_select_layer(2).unwrap();
        assert!(sync.sink().calls.is_empty());
        assert_eq!(sync.current_layer(), 2);
        assert_eq!(sync.current_frame(), 0);
        assert!(sync.on_select_layer(3).is_err());
        assert_eq!(sync.current_layer(), 2);
    }

    #[test]
    fn test_stale_frame_not_forwarded() {
        let bus = EventBus::new();
        let mut sync = loaded("2x2x2", 2);
        sync.set_event_emitter(CubeEventEmitter::from_emitter(bus.emitter()));

        sync.on_select_frame(1).unwrap();
        sync.sink_mut().take();
        bus.poll();

        // Frame 0 is no longer forwarded
        sync.edit_frame(0, 0, 0, 0, true).unwrap();
        assert!(sync.sink().calls.is_empty());
        assert!(bus.poll().is_empty());

        // Frame 1 is
        sync.edit_frame(1, 1, 0, 1, true).unwrap();
        assert_eq!(sync.sink().set_leds(), vec![(1, 0, 1, true)]);
        let events = bus.poll();
        assert_eq!(
            downcast_event::<LedChangedEvent>(&events[0]),
            Some(&LedChangedEvent::new(1, 0, 1, true))
        );
    }

    #[test]
    fn test_select_frame_out_of_range_keeps_forwarding() {
        let mut sync = loaded("2x2x2", 3);
        assert!(sync.on_select_frame(3).is_err());
        assert_eq!(sync.current_frame(), 0);
        assert_eq!(sync.forwarded_frame(), Some(0));
        assert!(sync.sink().calls.is_empty());
    }

    #[test]
    fn test_frame_switch_uses_new_frames_layer() {
        let mut sync = loaded("3x3x3", 2);
        sync.on_select_frame(1).unwrap();
        sync.on_select_layer(2).unwrap();
        sync.on_select_frame(0).unwrap();
        sync.set_display_mode(DisplayMode::ActiveLayer);
        sync.sink_mut().take();

        sync.on_select_frame(1).unwrap();
        let calls = sync.sink_mut().take();
        assert_eq!(calls[0], SinkCall::ShowLayer(2));
        assert!(calls[1..].iter().all(|c| matches!(c, SinkCall::SetLed { z: 2, .. })));
    }

    #[test]
    fn test_full_cube_mode_repaints_everything() {
        let mut sync = loaded("2x2x2", 1);
        sync.set_display_mode(DisplayMode::ActiveLayer);
        sync.sink_mut().take();

        assert!(sync.set_display_mode(DisplayMode::FullCube));
        let calls = sync.sink_mut().take();
        assert_eq!(calls[0], SinkCall::ShowCube);
        assert_eq!(calls.len(), 1 + 8);

        assert!(!sync.set_display_mode(DisplayMode::FullCube));
        assert!(sync.sink().calls.is_empty());
    }

    #[test]
    fn test_duration_through_synchronizer() {
        let bus = EventBus::new();
        let mut sync = loaded("2x2x2", 2);
        sync.set_event_emitter(CubeEventEmitter::from_emitter(bus.emitter()));

        sync.on_set_duration(5000).unwrap();
        assert!(matches!(sync.on_set_duration(65536), Err(EditorError::Range { .. })));
        assert!(matches!(
            sync.on_set_duration_value(&json!(1.5)),
            Err(EditorError::Type { .. })
        ));
        assert_eq!(sync.animation().active_frame().duration(), 5000);

        let events = bus.poll();
        assert_eq!(events.len(), 1);
        assert_eq!(
            downcast_event::<DurationChangedEvent>(&events[0]),
            Some(&DurationChangedEvent { frame: 0, duration_ms: 5000 })
        );
    }

    #[test]
    fn test_fill_active_layer() {
        let mut sync = loaded("2x2x2", 1);
        sync.on_led_toggled(0, 0, true).unwrap();
        sync.sink_mut().take();

        assert_eq!(sync.fill_active_layer(true), 3);
        assert_eq!(sync.sink().set_leds().len(), 3);
        assert_eq!(sync.fill_active_layer(true), 0);
    }
}
