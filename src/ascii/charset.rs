//! Density ramp definition.

/// Density ramp, ordered from densest (`$`) to sparsest (`.`).
///
/// The ramp holds 66 glyphs while intensities are bucketed onto
/// [`INDEX_LEVELS`] levels; the top buckets past the end of the ramp
/// collapse onto the final glyph.
pub const DENSITY_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q',
    'w', 'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x',
    'r', 'j', 'f', 't', '/', '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+', '~',
    '<', '>', 'i', '!', 'l', 'I', ';', ':', ',', '^', '`', '.',
];

/// Number of glyphs in [`DENSITY_RAMP`].
pub const RAMP_LEN: usize = 66;

/// Number of levels the 0-255 intensity range is bucketed onto.
pub const INDEX_LEVELS: usize = 69;
