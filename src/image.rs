//! `.foo` raster decoding.
//!
//! A `.foo` file is a text header `"<width> <height>"`, one terminator byte,
//! then `width * height` raw intensity bytes in row-major order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ConvertError, DecodeError};

/// A grayscale raster, one byte per pixel in row-major order.
///
/// `pixels.len() == width * height` always holds; construct through
/// [`Image::new`] or [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Build an image, checking that `pixels` holds exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(DecodeError::PayloadSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at (`row`, `col`), or `None` outside the image.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }

    /// Iterate over pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |r| &self.pixels[r * self.width..(r + 1) * self.width])
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize, DecodeError> {
    width
        .checked_mul(height)
        .ok_or(DecodeError::DimensionsOverflow { width, height })
}

/// Read and decode a `.foo` file.
pub fn read_image(path: &Path) -> Result<Image, ConvertError> {
    let mut file = File::open(path).map_err(|e| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ConvertError::ReadInput {
            path: path.to_path_buf(),
            source: e,
        })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(decode(&bytes)?)
}

/// Decode the contents of a `.foo` file.
///
/// A payload exactly one byte short is accepted and padded with a final
/// zero pixel. Any other shortfall is a [`DecodeError::PayloadSizeMismatch`].
/// Bytes beyond `width * height` are ignored.
pub fn decode(bytes: &[u8]) -> Result<Image, DecodeError> {
    let mut cursor = 0;
    let width = parse_dimension(bytes, &mut cursor, "missing or invalid width")?;
    let height = parse_dimension(bytes, &mut cursor, "missing or invalid height")?;

    // Exactly one terminator byte follows the height token.
    if cursor < bytes.len() {
        cursor += 1;
    }

    let expected = pixel_count(width, height)?;
    let available = &bytes[cursor..];
    log::debug!(
        "Header {}x{}, expecting {} payload bytes, {} available",
        width,
        height,
        expected,
        available.len()
    );

    let mut pixels = available[..expected.min(available.len())].to_vec();
    if pixels.len() + 1 == expected {
        log::warn!("Payload is one byte short, padding final pixel with 0");
        pixels.push(0);
    }
    if pixels.len() != expected {
        return Err(DecodeError::PayloadSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(Image {
        width,
        height,
        pixels,
    })
}

/// Parse one whitespace-delimited decimal token starting at `cursor`.
///
/// Leading ASCII whitespace and an optional `+` are accepted. The cursor is
/// left on the first byte after the digits.
fn parse_dimension(
    bytes: &[u8],
    cursor: &mut usize,
    what: &'static str,
) -> Result<usize, DecodeError> {
    while *cursor < bytes.len() && bytes[*cursor].is_ascii_whitespace() {
        *cursor += 1;
    }
    if *cursor < bytes.len() && bytes[*cursor] == b'+' {
        *cursor += 1;
    }

    let start = *cursor;
    let mut value: usize = 0;
    while *cursor < bytes.len() && bytes[*cursor].is_ascii_digit() {
        let digit = (bytes[*cursor] - b'0') as usize;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::InvalidHeader(what))?;
        *cursor += 1;
    }

    if *cursor == start {
        return Err(DecodeError::InvalidHeader(what));
    }
    Ok(value)
}
