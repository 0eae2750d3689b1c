//! Reader -> Mapper -> Writer orchestration.

use std::fmt;
use std::path::Path;

use crate::ascii;
use crate::error::ConvertError;
use crate::image;
use crate::writer;

/// Dimensions of a converted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Convert the `.foo` file at `input` into a `.foo2` file at `output`.
///
/// The input is fully decoded before `output` is opened, so a decode
/// failure never touches the destination.
pub fn convert(input: &Path, output: &Path) -> Result<Dimensions, ConvertError> {
    let image = image::read_image(input)?;
    let dims = Dimensions {
        width: image.width(),
        height: image.height(),
    };
    log::info!("Decoded {} ({} pixels)", dims, image.pixels().len());

    let grid = ascii::to_grid(&image);
    drop(image);

    writer::write_grid(output, &grid)?;
    log::info!("Wrote {} to {}", dims, output.display());

    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_convert_reference_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("img.foo");
        let output = temp_dir.path().join("img.foo2");
        let mut bytes = b"2 2\n".to_vec();
        bytes.extend_from_slice(&[0, 128, 255, 64]);
        std::fs::write(&input, bytes).unwrap();

        let dims = convert(&input, &output).unwrap();
        assert_eq!(dims, Dimensions { width: 2, height: 2 });
        assert_eq!(dims.to_string(), "2x2");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "2 2\n$n\n.q\n");
    }

    #[test]
    fn test_convert_decode_failure_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("short.foo");
        let output = temp_dir.path().join("out.foo2");
        std::fs::write(&input, b"2 2\n\x01\x02").unwrap();
        std::fs::write(&output, "previous").unwrap();

        let err = convert(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_convert_missing_input_does_not_create_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.foo2");
        let err = convert(&temp_dir.path().join("nope.foo"), &output).unwrap_err();
        assert!(matches!(err, ConvertError::OpenInput { .. }));
        assert!(!output.exists());
    }
}
