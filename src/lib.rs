//! Rasterize a single line segment onto a canvas and write it as a BMP.
//!
//! ```no_run
//! use bmpline::{write_segment_image, Point, RenderConfig};
//!
//! let config = RenderConfig::default();
//! write_segment_image("line.bmp".as_ref(), &config, Point::new(10, 10), Point::new(200, 200))?;
//! # Ok::<(), bmpline::Error>(())
//! ```

pub mod encoder;
pub mod error;
pub mod renderer;

use std::path::Path;

pub use encoder::{BmpEncoder, RowOrder};
pub use error::{Error, Result};
pub use renderer::{Background, Canvas, Color, PixelFormat, Point, Rasterizer, RenderConfig};

/// Render the segment `start`-`end` with `config` and write it to `path`.
///
/// Points use a bottom-up convention and must lie inside the canvas.
pub fn write_segment_image(path: &Path, config: &RenderConfig, start: Point, end: Point) -> Result<()> {
    let canvas = Rasterizer::new(config.clone()).render_segment(start, end)?;
    BmpEncoder::new(config.row_order).write_to_file(path, &canvas)
}
