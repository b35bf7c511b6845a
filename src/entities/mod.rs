//! Entities module - the animation data model, free of any GUI code.
//!
//! Ownership runs strictly downward:
//! `AnimationSequence` -> `FrameGrid` -> `LayerGrid` -> `LedState`.
//! Selection state (active frame, active layer) lives on the owning entity.

pub mod animation;
pub mod cube_events;
pub mod dims;
pub mod frame;
pub mod layer;
pub mod metadata;

pub use animation::AnimationSequence;
pub use cube_events::{
    CubeResizedEvent, DurationChangedEvent, FrameChangedEvent, LayerChangedEvent, LedChangedEvent,
};
pub use dims::CubeDims;
pub use frame::{FrameGrid, parse_duration};
pub use layer::{LayerGrid, LedState};
pub use metadata::AnimationMetadata;
