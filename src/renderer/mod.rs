mod canvas;
mod colors;

pub use canvas::{Canvas, PixelFormat};
pub use colors::{Color, ParseColorError};

use crate::encoder::RowOrder;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What the canvas is filled with before the segment is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Gradient,
    Solid(Color),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub format: PixelFormat,
    pub background: Background,
    pub line_color: Color,
    pub row_order: RowOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            format: PixelFormat::Bgr24,
            background: Background::Gradient,
            line_color: Color::WHITE,
            row_order: RowOrder::TopDown,
        }
    }
}

/// Builds the one-segment scene from a [`RenderConfig`].
///
/// Input points use a bottom-up convention (y = 0 is the bottom row) while the
/// canvas is stored top-down, so both endpoints are flipped here before they
/// reach [`Canvas::draw_line`].
pub struct Rasterizer {
    config: RenderConfig,
}

impl Rasterizer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Check the canvas size, then that `point` lies on the canvas
    pub fn validate(&self, point: Point) -> Result<()> {
        let RenderConfig { width, height, .. } = self.config;
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if point.x < 0 || point.x >= width || point.y < 0 || point.y >= height {
            return Err(Error::CoordinateOutOfRange {
                x: point.x,
                y: point.y,
                width: width as u32,
                height: height as u32,
            });
        }
        Ok(())
    }

    /// Map a bottom-up point to its top-down storage row.
    /// Results beyond the `i32` range saturate; they are off the canvas either way.
    pub fn flip(&self, point: Point) -> Point {
        let y = self.config.height as i64 - 1 - point.y as i64;
        Point::new(point.x, y.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    pub fn render_segment(&self, start: Point, end: Point) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.config.width, self.config.height, self.config.format)?;
        self.validate(start)?;
        self.validate(end)?;

        match self.config.background {
            Background::Gradient => canvas.fill_vertical_gradient(),
            Background::Solid(color) => canvas.fill_solid(color),
        }

        let (a, b) = (self.flip(start), self.flip(end));
        canvas.draw_line(a.x, a.y, b.x, b.y, self.config.line_color);

        Ok(canvas)
    }
}
