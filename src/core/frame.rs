//! Renderable primitives handed to a drawing surface

use serde::Serialize;

use super::palette::Rgb;

pub const POINT_COLOR: Rgb = Rgb::new(0x00, 0xf0, 0xff);
pub const POINT_SIZE: f32 = 0.15;
pub const POINT_OPACITY: f32 = 0.8;
pub const LINE_COLOR: Rgb = Rgb::new(0x70, 0x00, 0xff);
pub const LINE_WIDTH: f32 = 2.0;

/// Point cloud in vertex-buffer layout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointCloud {
    /// `[x0, y0, z0, x1, ...]`
    pub positions: Vec<f32>,
    pub size: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl PointCloud {
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// One line with its own opacity
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineInstance {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub opacity: f32,
    pub color: Rgb,
    pub width: f32,
}

/// Everything the constellation draws in one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderFrame {
    pub points: PointCloud,
    pub lines: Vec<LineInstance>,
}
