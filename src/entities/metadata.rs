//! Animation name and capacity figures from the setup dialog.

use serde::{Deserialize, Serialize};

use super::dims::CubeDims;
use crate::error::{EditorError, Result};

/// Longest animation name accepted by the setup dialog
pub const MAX_NAME_LEN: usize = 32;

/// User-facing description of an animation.
///
/// The controller count is derived from `dims` on every call, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationMetadata {
    name: String,
    dims: CubeDims,
}

impl Default for AnimationMetadata {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            dims: CubeDims::default(),
        }
    }
}

impl AnimationMetadata {
    pub fn new(name: &str, dims: CubeDims) -> Result<Self> {
        let mut meta = Self {
            name: String::new(),
            dims,
        };
        meta.set_name(name)?;
        Ok(meta)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename. Fails if longer than [`MAX_NAME_LEN`] characters.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(EditorError::Range {
                what: "name length",
                value: len as i64,
                min: 0,
                max: MAX_NAME_LEN as i64,
            });
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn dims(&self) -> CubeDims {
        self.dims
    }

    pub fn set_dims(&mut self, dims: CubeDims) {
        self.dims = dims;
    }

    pub fn controller_count(&self) -> usize {
        self.dims.controller_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_count_follows_dims() {
        let mut meta = AnimationMetadata::new("spin", CubeDims::cube(5)).unwrap();
        assert_eq!(meta.controller_count(), 2);

        meta.set_dims(CubeDims::new(8, 8, 8));
        // 64 + 8 = 72 -> 5
        assert_eq!(meta.controller_count(), 5);

        meta.set_dims(CubeDims::new(8, 8, 9));
        // 64 + 9 = 73 -> 5
        assert_eq!(meta.controller_count(), 5);

        meta.set_dims(CubeDims::new(2, 2, 12));
        // 4 + 12 = 16 -> 1
        assert_eq!(meta.controller_count(), 1);
    }

    #[test]
    fn test_name_length_limit() {
        let ok = "a".repeat(MAX_NAME_LEN);
        assert!(AnimationMetadata::new(&ok, CubeDims::default()).is_ok());

        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        let err = AnimationMetadata::new(&too_long, CubeDims::default()).unwrap_err();
        assert!(matches!(err, EditorError::Range { value: 33, .. }));

        let mut meta = AnimationMetadata::default();
        assert!(meta.set_name(&too_long).is_err());
        assert_eq!(meta.name(), "Untitled");
    }
}
