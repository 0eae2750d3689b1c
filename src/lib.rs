//! foo2ascii library crate.
//!
//! Converts `.foo` grayscale rasters into `.foo2` ASCII-art text files.
//! The pipeline is Reader ([`image`]) -> Mapper ([`ascii`]) -> Writer
//! ([`writer`]), driven by [`pipeline::convert`].

pub mod ascii;
pub mod cli;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod writer;

pub use error::{ConvertError, DecodeError};
pub use pipeline::{convert, Dimensions};
