//! LED cube animation editor library
//!
//! Re-exports all modules for use by the binary target and tests.

// Model, synchronizer and event bus
pub mod core;
pub mod entities;
pub mod error;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod help;
pub mod widgets;

pub use core::event_bus::{BoxedEvent, CubeEventEmitter, EventBus, EventEmitter, downcast_event};
pub use core::{DisplayMode, PreviewSink, RecordingSink, SinkCall, Synchronizer};
pub use entities::{AnimationMetadata, AnimationSequence, CubeDims, FrameGrid, LayerGrid};
pub use error::{EditorError, Result};
