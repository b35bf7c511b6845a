//! Layer editor grid geometry and actions.
//!
//! The grid is drawn with the highest y row on top, like looking down the
//! cube from above with y pointing away.

use crate::core::event_bus::{BoxedEvent, Event};

/// Layer editor result - all actions via events
#[derive(Default)]
pub struct LayerEditorActions {
    pub events: Vec<BoxedEvent>,
}

impl LayerEditorActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }
}

/// Model y for a grid row counted from the top
pub fn row_to_y(row: usize, y_count: usize) -> usize {
    y_count.saturating_sub(row + 1)
}

/// Axis label for a zero-based coordinate, counted from 1 like the selectors
pub fn axis_label_text(n: usize) -> String {
    (n + 1).to_string()
}

/// Button side that fits `cols x rows` into `avail`, capped at `max_size`
pub fn fit_button_size(avail: (f32, f32), cols: usize, rows: usize, spacing: f32, max_size: f32) -> f32 {
    let fit = |space: f32, n: usize| {
        if n == 0 {
            return max_size;
        }
        (space - spacing * (n as f32 - 1.0)) / n as f32
    };
    fit(avail.0, cols).min(fit(avail.1, rows)).clamp(8.0, max_size.max(8.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_is_highest_y() {
        assert_eq!(row_to_y(0, 5), 4);
        assert_eq!(row_to_y(4, 5), 0);
    }

    #[test]
    fn test_axis_labels_count_from_one() {
        assert_eq!(axis_label_text(0), "1");
        assert_eq!(axis_label_text(15), "16");
        let labels: Vec<String> = (0..3).map(|row| axis_label_text(row_to_y(row, 3))).collect();
        assert_eq!(labels, ["3", "2", "1"]);
    }

    #[test]
    fn test_fit_button_size() {
        // Plenty of space: capped
        assert_eq!(fit_button_size((1000.0, 1000.0), 4, 4, 4.0, 32.0), 32.0);
        // 4 buttons + 3 gaps in 100px
        assert_eq!(fit_button_size((100.0, 1000.0), 4, 4, 4.0, 32.0), 22.0);
        // Never below the minimum
        assert_eq!(fit_button_size((10.0, 10.0), 16, 16, 4.0, 32.0), 8.0);
    }
}
