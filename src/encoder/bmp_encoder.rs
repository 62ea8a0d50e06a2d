use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{padded_row_len, RowOrder, HEADER_LEN};
use crate::error::{Error, Result};
use crate::renderer::Canvas;

/// 14-byte BITMAPFILEHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub const SIZE: usize = 14;
    pub const MAGIC: [u8; 2] = *b"BM";

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&Self::MAGIC);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // reserved1
        out.extend_from_slice(&0u16.to_le_bytes()); // reserved2
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

/// 40-byte BITMAPINFOHEADER for uncompressed images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: i32,
    /// Negative for top-down storage
    pub height: i32,
    pub bits_per_pixel: u16,
}

impl InfoHeader {
    pub const SIZE: usize = 40;
    /// 72 DPI
    pub const PIXELS_PER_METER: i32 = 2835;

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(Self::SIZE as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
        out.extend_from_slice(&0u32.to_le_bytes()); // image size, may be 0 for BI_RGB
        out.extend_from_slice(&Self::PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&Self::PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // colors important
    }
}

/// Serializes a [`Canvas`] as an uncompressed BMP.
///
/// Canvas rows are unpadded; stored rows are zero-padded to a multiple of
/// four bytes, which only changes the layout for 24-bit images whose width is
/// not a multiple of four.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpEncoder {
    row_order: RowOrder,
}

impl BmpEncoder {
    pub fn new(row_order: RowOrder) -> Self {
        Self { row_order }
    }

    pub fn headers(&self, canvas: &Canvas) -> (FileHeader, InfoHeader) {
        let pixel_bytes = padded_row_len(canvas.row_stride()) * canvas.height();
        let offset = (FileHeader::SIZE + InfoHeader::SIZE) as u32;
        debug_assert_eq!(offset as u64, HEADER_LEN);

        // Canvas::new guarantees the total fits in u32
        let file = FileHeader {
            file_size: offset + pixel_bytes as u32,
            pixel_data_offset: offset,
        };
        let info = InfoHeader {
            width: canvas.width() as i32,
            height: self.row_order.signed_height(canvas.height() as i32),
            bits_per_pixel: canvas.format().bits_per_pixel(),
        };
        (file, info)
    }

    pub fn encode(&self, canvas: &Canvas) -> Vec<u8> {
        let (file, info) = self.headers(canvas);
        let mut out = Vec::with_capacity(file.file_size as usize);
        file.write_to(&mut out);
        info.write_to(&mut out);

        let stride = canvas.row_stride();
        let padding = padded_row_len(stride) - stride;
        let rows = canvas.data().chunks_exact(stride);

        let mut push_row = |row: &[u8]| {
            out.extend_from_slice(row);
            out.resize(out.len() + padding, 0);
        };
        match self.row_order {
            RowOrder::TopDown => rows.for_each(&mut push_row),
            RowOrder::BottomUp => rows.rev().for_each(&mut push_row),
        }

        out
    }

    /// Encode `canvas` and write it to `path`.
    ///
    /// A failure after the file was opened may leave it truncated; the error
    /// is returned and the path is left alone.
    pub fn write_to_file(&self, path: &Path, canvas: &Canvas) -> Result<()> {
        let bytes = self.encode(canvas);
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&bytes).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, PixelFormat};

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    fn read_i32(bytes: &[u8], at: usize) -> i32 {
        i32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    fn read_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes(bytes[at..at + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_sizes() {
        let mut out = Vec::new();
        FileHeader { file_size: 0, pixel_data_offset: 0 }.write_to(&mut out);
        assert_eq!(out.len(), FileHeader::SIZE);

        out.clear();
        InfoHeader { width: 1, height: 1, bits_per_pixel: 24 }.write_to(&mut out);
        assert_eq!(out.len(), InfoHeader::SIZE);
    }

    #[test]
    fn test_encode_256_square_layout() {
        let canvas = Canvas::new(256, 256, PixelFormat::Bgr24).unwrap();
        let bytes = BmpEncoder::default().encode(&canvas);

        assert_eq!(bytes.len(), 54 + 256 * 256 * 3);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(read_u32(&bytes, 2), bytes.len() as u32);
        assert_eq!(read_u16(&bytes, 6), 0);
        assert_eq!(read_u16(&bytes, 8), 0);
        assert_eq!(read_u32(&bytes, 10), 54);

        let info = 14;
        assert_eq!(read_u32(&bytes, info), 40);
        assert_eq!(read_i32(&bytes, info + 4), 256);
        assert_eq!(read_i32(&bytes, info + 8), -256);
        assert_eq!(read_u16(&bytes, info + 12), 1);
        assert_eq!(read_u16(&bytes, info + 14), 24);
        assert_eq!(read_u32(&bytes, info + 16), 0);
        assert_eq!(read_u32(&bytes, info + 20), 0);
        assert_eq!(read_i32(&bytes, info + 24), 2835);
        assert_eq!(read_i32(&bytes, info + 28), 2835);
        assert_eq!(read_u32(&bytes, info + 32), 0);
        assert_eq!(read_u32(&bytes, info + 36), 0);

        assert_eq!(&bytes[54..], canvas.data());
    }

    #[test]
    fn test_encode_32_bit() {
        let mut canvas = Canvas::new(3, 2, PixelFormat::Bgra32).unwrap();
        canvas.set_pixel(2, 0, Color::new(1, 2, 3, 4));
        let bytes = crate::encoder::encode(&canvas);

        assert_eq!(bytes.len(), 54 + 3 * 2 * 4);
        assert_eq!(read_u16(&bytes, 28), 32);
        assert_eq!(&bytes[54 + 8..54 + 12], &[3, 2, 1, 4]);
    }

    #[test]
    fn test_encode_pads_24_bit_rows() {
        let mut canvas = Canvas::new(3, 2, PixelFormat::Bgr24).unwrap();
        canvas.fill_solid(Color::WHITE);
        let bytes = crate::encoder::encode(&canvas);

        // 9 bytes of pixels + 3 bytes of padding per row
        assert_eq!(bytes.len(), 54 + 12 * 2);
        assert_eq!(read_u32(&bytes, 2), 54 + 24);
        for row in bytes[54..].chunks_exact(12) {
            assert!(row[..9].iter().all(|&b| b == 255));
            assert_eq!(&row[9..], &[0, 0, 0]);
        }
    }

    #[test]
    fn test_encode_bottom_up_reverses_rows() {
        let mut canvas = Canvas::new(4, 3, PixelFormat::Bgr24).unwrap();
        canvas.set_pixel(0, 0, Color::WHITE);
        let bytes = BmpEncoder::new(RowOrder::BottomUp).encode(&canvas);

        assert_eq!(read_i32(&bytes, 22), 3);
        let rows: Vec<&[u8]> = bytes[54..].chunks_exact(12).collect();
        assert_eq!(rows.len(), 3);
        // Visual top row is stored last
        assert_eq!(&rows[2][..3], &[255, 255, 255]);
        assert!(rows[0].iter().all(|&b| b == 0));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_leaves_target_in_place() {
        // Opens fine, every write fails with ENOSPC
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }
        let canvas = Canvas::new(64, 64, PixelFormat::Bgr24).unwrap();

        let err = BmpEncoder::default().write_to_file(path, &canvas).unwrap_err();
        match err {
            Error::Io { path: ref failed, ref source } => {
                assert_eq!(failed, path);
                assert_eq!(source.raw_os_error(), Some(28));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
        assert!(path.exists());
    }
}
