//! Editor controls state and selector stepping.

use crate::core::event_bus::{BoxedEvent, Event};

/// Label for a frame/layer entry: one-based, two digits
pub fn index_label(idx: usize) -> String {
    format!("{:02}", idx + 1)
}

/// Step a selector up (towards the last entry) or down.
///
/// Returns `None` when already at that end.
pub fn step_index(current: usize, count: usize, up: bool) -> Option<usize> {
    if up {
        (current + 1 < count).then_some(current + 1)
    } else {
        current.checked_sub(1).filter(|_| count > 0)
    }
}

/// (up enabled, down enabled) for a selector
pub fn step_buttons_enabled(current: usize, count: usize) -> (bool, bool) {
    (
        step_index(current, count, true).is_some(),
        step_index(current, count, false).is_some(),
    )
}

/// Persistent UI state for the controls panel
#[derive(Clone, Debug, Default)]
pub struct ControlsState {
    /// Duration text being edited
    pub duration_text: String,
    /// (frame, duration) the text was last synced from
    synced_from: Option<(usize, u16)>,
}

impl ControlsState {
    /// Refresh the duration text when the active frame or its duration changed
    pub fn sync_duration(&mut self, frame: usize, duration_ms: u16) {
        if self.synced_from != Some((frame, duration_ms)) {
            self.duration_text = duration_ms.to_string();
            self.synced_from = Some((frame, duration_ms));
        }
    }

    /// Force the next `sync_duration` to overwrite the text
    pub fn invalidate(&mut self) {
        self.synced_from = None;
    }
}

/// Controls panel result - all actions via events
#[derive(Default)]
pub struct ControlsActions {
    pub events: Vec<BoxedEvent>,
}

impl ControlsActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_label() {
        assert_eq!(index_label(0), "01");
        assert_eq!(index_label(15), "16");
    }

    #[test]
    fn test_step_index_bounds() {
        assert_eq!(step_index(0, 3, true), Some(1));
        assert_eq!(step_index(2, 3, true), None);
        assert_eq!(step_index(2, 3, false), Some(1));
        assert_eq!(step_index(0, 3, false), None);
        assert_eq!(step_index(0, 0, true), None);
    }

    #[test]
    fn test_step_buttons() {
        assert_eq!(step_buttons_enabled(0, 1), (false, false));
        assert_eq!(step_buttons_enabled(0, 3), (true, false));
        assert_eq!(step_buttons_enabled(1, 3), (true, true));
        assert_eq!(step_buttons_enabled(2, 3), (false, true));
    }

    #[test]
    fn test_duration_sync_keeps_edits() {
        let mut state = ControlsState::default();
        state.sync_duration(0, 5);
        assert_eq!(state.duration_text, "5");

        state.duration_text = "50".into();
        state.sync_duration(0, 5);
        assert_eq!(state.duration_text, "50");

        state.sync_duration(1, 5);
        assert_eq!(state.duration_text, "5");

        state.duration_text = "x".into();
        state.invalidate();
        state.sync_duration(1, 5);
        assert_eq!(state.duration_text, "5");
    }
}
