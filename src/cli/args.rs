//! CLI argument parsing with clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Convert a .foo grayscale raster into .foo2 ASCII art
#[derive(Parser, Debug)]
#[command(name = "foo2ascii")]
#[command(about = "Convert .foo grayscale rasters to ASCII art", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Input .foo file (text header, then raw 8-bit pixels)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Output .foo2 file (created or truncated)
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
}

/// Parse arguments, including the program name as the first item.
///
/// Every argument is a path, so anything other than exactly two is an
/// error, `--help` included.
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}
