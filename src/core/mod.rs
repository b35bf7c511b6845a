//! Core engine modules - event bus, preview interface, synchronizer
//!
//! These modules drive the editor independent of any widget code.

pub mod event_bus;
pub mod preview_sink;
pub mod synchronizer;

// Re-exports for convenience
pub use event_bus::{CubeEventEmitter, EventBus};
pub use preview_sink::{PreviewSink, RecordingSink, SinkCall};
pub use synchronizer::{DisplayMode, DisplayModeChangedEvent, Synchronizer};
