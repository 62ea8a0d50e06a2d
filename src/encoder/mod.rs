mod bmp_encoder;

pub use bmp_encoder::{BmpEncoder, FileHeader, InfoHeader};

use std::path::Path;

use crate::error::Result;
use crate::renderer::Canvas;

/// Header bytes that precede the pixel rows in a BMP file.
pub(crate) const HEADER_LEN: u64 = 54;

/// Largest file the BMP size fields can describe.
const MAX_FILE_SIZE: u64 = u32::MAX as u64;

/// Length of a stored BMP row: `stride` rounded up to a multiple of 4.
pub(crate) fn padded_row_len(stride: usize) -> usize {
    (stride + 3) & !3
}

/// Size of the encoded file for `height` rows of `stride` bytes, or `None`
/// when it doesn't fit the 32-bit size field.
pub(crate) fn encoded_file_size(stride: u64, height: u64) -> Option<u32> {
    ((stride + 3) & !3)
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_add(HEADER_LEN))
        .filter(|&size| size <= MAX_FILE_SIZE)
        .map(|size| size as u32)
}

/// Row order recorded in the info header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Negative height; first stored row is the top of the image
    #[default]
    TopDown,
    /// Positive height; first stored row is the bottom of the image
    BottomUp,
}

impl RowOrder {
    /// Signed height field for an image `height` rows tall
    pub fn signed_height(self, height: i32) -> i32 {
        match self {
            RowOrder::TopDown => -height,
            RowOrder::BottomUp => height,
        }
    }
}

/// Encode with the default (top-down) encoder
pub fn encode(canvas: &Canvas) -> Vec<u8> {
    BmpEncoder::default().encode(canvas)
}

/// Write with the default (top-down) encoder
pub fn write_to_file(path: &Path, canvas: &Canvas) -> Result<()> {
    BmpEncoder::default().write_to_file(path, canvas)
}
