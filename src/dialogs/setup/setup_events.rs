//! Animation setup dialog events.

use crate::entities::CubeDims;

/// Committed setup: rename and rebuild the animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplySetupEvent {
    pub name: String,
    pub dims: CubeDims,
    pub frames: usize,
}
