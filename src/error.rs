//! Error types for the editor core.
//!
//! Every model and synchronizer operation returns [`Result`] and reports
//! failures synchronously to the immediate caller. The UI shows them in an
//! error window instead of faulting.

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors raised by the LED cube model, synchronizer and preview sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Index, coordinate or duration outside its valid range
    #[error("{what} out of range ({min} <= {what} <= {max}), got {value}")]
    Range {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Value of the wrong kind (e.g. a non-integer duration)
    #[error("Expected {expected}, got {got}")]
    Type { expected: &'static str, got: String },

    /// Dimension string the preview does not support
    #[error("Invalid config: {config}\nValid options: {valid}")]
    Configuration { config: String, valid: String },

    /// Action the editor intentionally does not provide
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl EditorError {
    /// Range error for a zero-based index bounded by `len`.
    pub fn index(what: &'static str, value: usize, len: usize) -> Self {
        EditorError::Range {
            what,
            value: value as i64,
            min: 0,
            max: len as i64 - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_bounds() {
        let err = EditorError::index("frame", 3, 3);
        assert_eq!(
            err,
            EditorError::Range { what: "frame", value: 3, min: 0, max: 2 }
        );
        assert_eq!(err.to_string(), "frame out of range (0 <= frame <= 2), got 3");
    }

    #[test]
    fn test_not_implemented_message() {
        let err = EditorError::NotImplemented("File > Save");
        assert_eq!(err.to_string(), "File > Save is not implemented");
    }
}
