use super::Color;
use crate::encoder::encoded_file_size;
use crate::error::{Error, Result};

/// Stored pixel layout. Channels are always blue, green, red[, alpha].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Bgr24,
    Bgra32,
}

impl PixelFormat {
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            24 => Ok(PixelFormat::Bgr24),
            32 => Ok(PixelFormat::Bgra32),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgr24 => 3,
            PixelFormat::Bgra32 => 4,
        }
    }

    pub fn bits_per_pixel(self) -> u16 {
        self.bytes_per_pixel() as u16 * 8
    }
}

/// A top-down pixel buffer. Row 0 is the visual top of the image.
#[derive(Clone, Debug)]
pub struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
    format: PixelFormat,
    row_stride: usize,
}

impl Canvas {
    pub fn new(width: i32, height: i32, format: PixelFormat) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        // The encoded file (headers + padded rows) has to fit in a u32
        let stride = width as u64 * format.bytes_per_pixel() as u64;
        if encoded_file_size(stride, height as u64).is_none() {
            return Err(Error::InvalidDimension { width, height });
        }

        let (w, h) = (width as usize, height as usize);
        let row_stride = w * format.bytes_per_pixel();

        Ok(Self {
            data: vec![0; row_stride * h],
            width: w,
            height: h,
            format,
            row_stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.row_stride + x as usize * self.format.bytes_per_pixel())
    }

    /// Write one pixel. Points outside the canvas are clipped silently.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.put(x as i64, y as i64, color);
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if let Some(idx) = self.offset(x, y) {
            let bpp = self.format.bytes_per_pixel();
            self.data[idx..idx + bpp].copy_from_slice(&color.to_bgra()[..bpp]);
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.offset(x as i64, y as i64)?;
        let px = &self.data[idx..idx + self.format.bytes_per_pixel()];
        let alpha = match self.format {
            PixelFormat::Bgr24 => 255,
            PixelFormat::Bgra32 => px[3],
        };
        Some(Color::new(px[2], px[1], px[0], alpha))
    }

    pub fn fill_solid(&mut self, color: Color) {
        let bpp = self.format.bytes_per_pixel();
        let bgra = color.to_bgra();
        for px in self.data.chunks_exact_mut(bpp) {
            px.copy_from_slice(&bgra[..bpp]);
        }
    }

    /// Monochrome left-to-right ramp: column `x` gets `floor(255 * x / width)`.
    pub fn fill_vertical_gradient(&mut self) {
        let bpp = self.format.bytes_per_pixel();
        let width = self.width;

        // Build one row and stamp it over every row
        let mut row = Vec::with_capacity(self.row_stride);
        for x in 0..width {
            let level = (255 * x as u64 / width as u64) as u8;
            row.extend_from_slice(&Color::gray(level).to_bgra()[..bpp]);
        }

        for dest in self.data.chunks_exact_mut(self.row_stride) {
            dest.copy_from_slice(&row);
        }
    }

    /// Draw a line using Bresenham's algorithm.
    ///
    /// Every point of the segment goes through the clipping path, so parts of
    /// the line outside the canvas are skipped without ending the walk.
    /// Endpoints are visited in a canonical order, which makes the lit set
    /// independent of which end the caller passes first.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        if (x1, y1) < (x0, y0) {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}
