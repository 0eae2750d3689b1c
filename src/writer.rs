//! `.foo2` text serialization.
//!
//! Output is `"<width> <height>\n"` followed by one line per grid row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::ascii::AsciiGrid;
use crate::error::ConvertError;

/// Serialize `grid` to any writer.
pub fn write_to<W: Write>(sink: &mut W, grid: &AsciiGrid) -> io::Result<()> {
    writeln!(sink, "{} {}", grid.width(), grid.height())?;
    for row in grid.rows() {
        sink.write_all(row.as_bytes())?;
        sink.write_all(b"\n")?;
    }
    sink.flush()
}

/// Write `grid` to a `.foo2` file at `path`, creating or truncating it.
///
/// Returns once every row is flushed and synced to disk. A failure partway
/// leaves whatever was already written in place.
pub fn write_grid(path: &Path, grid: &AsciiGrid) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(|e| ConvertError::OpenOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_failed = |e: io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut out = BufWriter::new(file);
    write_to(&mut out, grid).map_err(write_failed)?;
    let file = out.into_inner().map_err(|e| write_failed(e.into_error()))?;
    file.sync_all().map_err(write_failed)?;

    log::debug!("Wrote {} rows to {}", grid.height(), path.display());
    Ok(())
}
