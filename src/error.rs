use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Canvas dimensions must be positive and small enough for the BMP size fields
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    #[error("unsupported bit depth {0} (expected 24 or 32)")]
    UnsupportedBitDepth(u16),

    #[error("point ({x}, {y}) is outside the {width}x{height} canvas")]
    CoordinateOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
