//! Intensity to character mapping.

use super::charset::{DENSITY_RAMP, INDEX_LEVELS, RAMP_LEN};
use super::grid::AsciiGrid;
use crate::image::Image;

/// Ramp index for an intensity value.
///
/// Proportional bucketing: `v * (INDEX_LEVELS - 1) / 255` with truncating
/// division. Buckets beyond the last glyph clamp onto it.
#[inline]
pub fn ramp_index(v: u8) -> usize {
    let idx = (v as usize * (INDEX_LEVELS - 1)) / 255;
    idx.min(RAMP_LEN - 1)
}

/// Map one intensity value to its ramp character.
#[inline]
pub fn map_pixel(v: u8) -> char {
    DENSITY_RAMP[ramp_index(v)]
}

/// Map intensity values to ASCII characters.
///
/// Converts a run of intensity values (0-255) to characters from
/// [`DENSITY_RAMP`]. Lower values map to earlier (denser) glyphs, higher
/// values to later (sparser) glyphs.
///
/// # Example
/// ```
/// use foo2ascii::ascii::map_to_chars;
///
/// let chars = map_to_chars(&[0, 128, 255]);
/// assert_eq!(chars, vec!['$', 'n', '.']);
/// ```
pub fn map_to_chars(pixels: &[u8]) -> Vec<char> {
    pixels.iter().map(|&v| map_pixel(v)).collect()
}

/// Convert an image into a character grid, one row per image row.
pub fn to_grid(image: &Image) -> AsciiGrid {
    let rows: Vec<String> = image
        .rows()
        .map(|row| row.iter().map(|&v| map_pixel(v)).collect())
        .collect();
    AsciiGrid::from_rows(image.width(), image.height(), rows)
}
