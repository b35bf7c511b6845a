//! Editor controls events.

use crate::core::DisplayMode;

#[derive(Clone, Debug)]
pub struct SelectFrameEvent(pub usize);

#[derive(Clone, Debug)]
pub struct SelectLayerEvent(pub usize);

/// Raw duration text as typed; parsed by the handler.
#[derive(Clone, Debug)]
pub struct SetDurationEvent(pub String);

#[derive(Clone, Debug)]
pub struct SetDisplayModeEvent(pub DisplayMode);
