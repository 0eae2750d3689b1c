//! ASCII mapper for converting grayscale rasters to character grids.
//!
//! Every pixel is mapped independently onto the fixed
//! [`DENSITY_RAMP`]:
//!
//! 1. **Character mapping** - proportional bucketing of 0-255 onto ramp indices
//! 2. **Grid assembly** - one [`String`] row per image row, in row-major order
//!
//! Low intensities land on the dense glyphs at the start of the ramp, high
//! intensities on the sparse glyphs at the end.

mod charset;
mod grid;
mod mapping;

pub use charset::{DENSITY_RAMP, INDEX_LEVELS, RAMP_LEN};
pub use grid::AsciiGrid;
pub use mapping::{map_pixel, map_to_chars, ramp_index, to_grid};
