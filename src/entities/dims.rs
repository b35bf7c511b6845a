//! Cube dimensions and their `"XxYxZ"` textual form.
//!
//! The preview and the setup dialog address cubes by config strings such as
//! `"5x5x5"`. [`CubeDims`] parses and formats them; axis bounds are a UI
//! concern, the model accepts any positive size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// Smallest axis size offered by the setup dialog
pub const MIN_AXIS: usize = 2;
/// Largest axis size offered by the setup dialog
pub const MAX_AXIS: usize = 16;

/// LEDs per controller, used for capacity planning
pub const LEDS_PER_CONTROLLER: usize = 16;

/// Cube size along each axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeDims {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl CubeDims {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Cubic dims with the same size on every axis
    pub const fn cube(n: usize) -> Self {
        Self { x: n, y: n, z: n }
    }

    /// LEDs in one layer
    pub fn layer_len(&self) -> usize {
        self.x * self.y
    }

    /// LEDs in the whole cube
    pub fn len(&self) -> usize {
        self.x * self.y * self.z
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.x && y < self.y && z < self.z
    }

    /// Controllers needed to drive this cube: `ceil((x*y + z) / 16)`.
    ///
    /// One output per column plus one per layer plane.
    pub fn controller_count(&self) -> usize {
        (self.layer_len() + self.z).div_ceil(LEDS_PER_CONTROLLER)
    }

    /// Config token understood by the preview (`"5x5x5"`)
    pub fn config(&self) -> String {
        self.to_string()
    }
}

impl Default for CubeDims {
    fn default() -> Self {
        Self::cube(5)
    }
}

impl fmt::Display for CubeDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl FromStr for CubeDims {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::Configuration {
            config: s.to_string(),
            valid: "XxYxZ with positive integers, e.g. 5x5x5".to_string(),
        };

        let parts: Vec<&str> = s.trim().split(['x', 'X']).collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(invalid());
        };
        let parse = |p: &str| p.trim().parse::<usize>().ok().filter(|n| *n > 0);
        match (parse(*x), parse(*y), parse(*z)) {
            (Some(x), Some(y), Some(z)) => Ok(Self { x, y, z }),
            _ => Err(invalid()),
        }
    }
}
