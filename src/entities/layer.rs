//! One z-plane of LEDs.
//!
//! # Storage
//!
//! Dense row-major grid: index = `y * x_count + x`. Every (x, y) pair is
//! present from construction; a layer is never resized, the owning frame is
//! rebuilt instead.
//!
//! # Change reporting
//!
//! Mutators return `Option<LedChangedEvent>`. `set` reports `None` when the
//! LED already holds the requested state, so a redundant write never reaches
//! the preview.

use serde::{Deserialize, Serialize};

use super::cube_events::LedChangedEvent;
use crate::error::{EditorError, Result};

/// Single LED cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedState {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub on: bool,
}

impl LedState {
    fn changed(&self) -> LedChangedEvent {
        LedChangedEvent::new(self.x, self.y, self.z, self.on)
    }
}

/// All LEDs sharing one z coordinate within a frame
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayerGrid {
    z: usize,
    x_count: usize,
    y_count: usize,
    leds: Vec<LedState>,
}

impl LayerGrid {
    /// Create layer `z` with every LED off
    pub fn new(z: usize, x_count: usize, y_count: usize) -> Self {
        let leds = (0..y_count)
            .flat_map(|y| (0..x_count).map(move |x| LedState { x, y, z, on: false }))
            .collect();
        Self { z, x_count, y_count, leds }
    }

    pub fn z(&self) -> usize {
        self.z
    }

    /// (x_count, y_count)
    pub fn size(&self) -> (usize, usize) {
        (self.x_count, self.y_count)
    }

    /// All LEDs, row-major (y outer, x inner)
    pub fn get_leds(&self) -> &[LedState] {
        &self.leds
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        Ok(self.leds[idx].on)
    }

    /// Flip one LED. Always a transition, always reported.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<LedChangedEvent> {
        let idx = self.index(x, y)?;
        let led = &mut self.leds[idx];
        led.on = !led.on;
        Ok(led.changed())
    }

    /// Set one LED. Returns `None` if it already was in `state`.
    pub fn set(&mut self, x: usize, y: usize, state: bool) -> Result<Option<LedChangedEvent>> {
        let idx = self.index(x, y)?;
        let led = &mut self.leds[idx];
        if led.on == state {
            return Ok(None);
        }
        led.on = state;
        Ok(Some(led.changed()))
    }

    /// Switch every LED to `state`, returning only the real transitions.
    pub fn fill(&mut self, state: bool) -> Vec<LedChangedEvent> {
        self.leds
            .iter_mut()
            .filter(|led| led.on != state)
            .map(|led| {
                led.on = state;
                led.changed()
            })
            .collect()
    }

    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|led| led.on).count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.x_count {
            return Err(EditorError::index("x", x, self.x_count));
        }
        if y >= self.y_count {
            return Err(EditorError::index("y", y, self.y_count));
        }
        Ok(y * self.x_count + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer_dense_and_off() {
        let layer = LayerGrid::new(2, 4, 3);
        assert_eq!(layer.get_leds().len(), 12);
        assert!(layer.get_leds().iter().all(|led| !led.on && led.z == 2));
        assert_eq!(layer.size(), (4, 3));
    }

    #[test]
    fn test_row_major_order() {
        let layer = LayerGrid::new(0, 3, 2);
        let coords: Vec<(usize, usize)> = layer.get_leds().iter().map(|l| (l.x, l.y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut layer = LayerGrid::new(1, 5, 5);
        let first = layer.toggle(3, 4).unwrap();
        assert_eq!(first, LedChangedEvent::new(3, 4, 1, true));
        let second = layer.toggle(3, 4).unwrap();
        assert_eq!(second, LedChangedEvent::new(3, 4, 1, false));
        assert!(!layer.get(3, 4).unwrap());
    }

    #[test]
    fn test_set_deduplicates() {
        let mut layer = LayerGrid::new(0, 5, 5);
        assert_eq!(layer.set(1, 1, false).unwrap(), None);
        assert_eq!(
            layer.set(1, 1, true).unwrap(),
            Some(LedChangedEvent::new(1, 1, 0, true))
        );
        assert_eq!(layer.set(1, 1, true).unwrap(), None);
        assert_eq!(layer.lit_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut layer = LayerGrid::new(0, 5, 4);
        assert!(matches!(layer.toggle(5, 0), Err(EditorError::Range { what: "x", .. })));
        assert!(matches!(layer.set(0, 4, true), Err(EditorError::Range { what: "y", .. })));
        assert_eq!(layer.lit_count(), 0);
    }

    #[test]
    fn test_fill_reports_transitions_only() {
        let mut layer = LayerGrid::new(0, 2, 2);
        layer.set(0, 0, true).unwrap();
        let changes = layer.fill(true);
        assert_eq!(changes.len(), 3);
        assert!(layer.fill(true).is_empty());
        assert_eq!(layer.fill(false).len(), 4);
    }
}
