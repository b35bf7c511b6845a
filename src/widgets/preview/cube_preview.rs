//! 3D cube preview state: painted LED states plus an orbit camera.
//!
//! [`CubePreview`] is the editor's [`PreviewSink`]. It only knows what the
//! synchronizer paints into it; LEDs outside the shown layer are drawn dark
//! in layer mode.

use std::collections::BTreeSet;

use glam::{Mat4, Vec3};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::preview_sink::{PreviewSink, cube_configs, unsupported_config};
use crate::entities::CubeDims;
use crate::error::Result;

const DEFAULT_YAW: f32 = 0.6;
const DEFAULT_PITCH: f32 = 0.45;
const DEFAULT_DISTANCE: f32 = 3.2;
const MIN_DISTANCE: f32 = 1.5;
const MAX_DISTANCE: f32 = 8.0;
const PITCH_LIMIT: f32 = 1.45;
const FOV_Y: f32 = 0.8;

/// What part of the cube is displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shown {
    #[default]
    Cube,
    Layer(usize),
}

/// Orbit camera around the cube center
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for PreviewCamera {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl PreviewCamera {
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx;
        self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Projection * view for the given viewport aspect ratio
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y, aspect.max(0.01), 0.1, 100.0);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

/// Sink-side copy of the cube, as painted by the synchronizer
#[derive(Clone, Debug, Default)]
pub struct CubePreview {
    dims: Option<CubeDims>,
    leds: Vec<bool>,
    shown: Shown,
    pub camera: PreviewCamera,
}

impl CubePreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> Option<CubeDims> {
        self.dims
    }

    pub fn shown(&self) -> Shown {
        self.shown
    }

    /// Painted state of LED (x, y, z); false for unknown coordinates
    pub fn is_on(&self, x: usize, y: usize, z: usize) -> bool {
        self.index(x, y, z).map(|i| self.leds[i]).unwrap_or(false)
    }

    /// Whether LED (x, y, z) is drawn lit under the current display
    pub fn is_lit(&self, x: usize, y: usize, z: usize) -> bool {
        match self.shown {
            Shown::Cube => self.is_on(x, y, z),
            Shown::Layer(layer) => layer == z && self.is_on(x, y, z),
        }
    }

    /// World-space position of LED (x, y, z), cube centered at the origin
    /// and scaled to fit a unit box. Layers (z) stack along world +Y.
    pub fn world_pos(&self, x: usize, y: usize, z: usize) -> Vec3 {
        let Some(dims) = self.dims else {
            return Vec3::ZERO;
        };
        let span = (dims.x.max(dims.y).max(dims.z).max(2) - 1) as f32;
        let center = |n: usize, count: usize| (n as f32 - (count as f32 - 1.0) / 2.0) / span;
        Vec3::new(center(x, dims.x), center(z, dims.z), -center(y, dims.y))
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let dims = self.dims?;
        dims.contains(x, y, z)
            .then(|| (z * dims.y + y) * dims.x + x)
    }
}

impl PreviewSink for CubePreview {
    fn config_list(&self) -> BTreeSet<String> {
        cube_configs()
    }

    fn load_cube(&mut self, config: &str) -> Result<()> {
        let valid = self.config_list();
        if !valid.contains(config) {
            return Err(unsupported_config(config, &valid));
        }
        let dims: CubeDims = config.parse()?;
        self.dims = Some(dims);
        self.leds = vec![false; dims.len()];
        self.shown = Shown::Cube;
        debug!("Preview loaded {}", config);
        Ok(())
    }

    fn set_led(&mut self, x: usize, y: usize, z: usize, state: bool) {
        match self.index(x, y, z) {
            Some(i) => self.leds[i] = state,
            None => trace!("Preview ignored LED outside cube: ({}, {}, {})", x, y, z),
        }
    }

    fn show_cube(&mut self) {
        self.shown = Shown::Cube;
    }

    fn show_layer(&mut self, z: usize) {
        self.shown = Shown::Layer(z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_paint() {
        let mut preview = CubePreview::new();
        preview.load_cube("3x3x3").unwrap();
        preview.set_led(2, 1, 0, true);
        assert!(preview.is_on(2, 1, 0));
        assert!(!preview.is_on(1, 2, 0));
        // Outside the cube: ignored
        preview.set_led(3, 0, 0, true);
        assert!(!preview.is_on(3, 0, 0));
    }

    #[test]
    fn test_reload_clears_state() {
        let mut preview = CubePreview::new();
        preview.load_cube("2x2x2").unwrap();
        preview.set_led(1, 1, 1, true);
        preview.show_layer(1);
        preview.load_cube("4x4x4").unwrap();
        assert!(!preview.is_on(1, 1, 1));
        assert_eq!(preview.shown(), Shown::Cube);
        assert_eq!(preview.dims(), Some(CubeDims::cube(4)));
    }

    #[test]
    fn test_unsupported_config() {
        let mut preview = CubePreview::new();
        assert!(preview.load_cube("3x3x17").is_err());
        assert!(preview.load_cube("1x1x1").is_err());
        assert_eq!(preview.dims(), None);
    }

    #[test]
    fn test_uneven_cube() {
        let mut preview = CubePreview::new();
        preview.load_cube("8x8x4").unwrap();
        assert_eq!(preview.dims(), Some(CubeDims::new(8, 8, 4)));
        preview.set_led(7, 7, 3, true);
        assert!(preview.is_on(7, 7, 3));
        preview.set_led(0, 0, 4, true);
        assert!(!preview.is_on(0, 0, 4));
        // Layers stack along +Y and stay inside the unit box
        let top = preview.world_pos(0, 0, 3);
        let bottom = preview.world_pos(0, 0, 0);
        assert!(top.y > bottom.y);
        assert!(top.y <= 0.5 && bottom.y >= -0.5);
    }

    #[test]
    fn test_layer_mode_darkens_other_layers() {
        let mut preview = CubePreview::new();
        preview.load_cube("2x2x2").unwrap();
        preview.set_led(0, 0, 0, true);
        preview.set_led(0, 0, 1, true);
        preview.show_layer(1);
        assert!(!preview.is_lit(0, 0, 0));
        assert!(preview.is_lit(0, 0, 1));
        preview.show_cube();
        assert!(preview.is_lit(0, 0, 0));
    }

    #[test]
    fn test_world_pos_centered() {
        let mut preview = CubePreview::new();
        preview.load_cube("3x3x3").unwrap();
        assert_eq!(preview.world_pos(1, 1, 1), Vec3::ZERO);
        let corner = preview.world_pos(2, 0, 2);
        assert_eq!(corner, Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_camera_limits() {
        let mut camera = PreviewCamera::default();
        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.zoom(100.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
        camera.reset();
        assert_eq!(camera, PreviewCamera::default());
    }
}
