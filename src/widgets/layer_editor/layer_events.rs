//! Layer editor events.

/// Click on LED (x, y) of the active layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLedEvent {
    pub x: usize,
    pub y: usize,
}

/// Turn every LED of the active layer on or off
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillLayerEvent(pub bool);
