//! Character grid produced by the mapper.

/// ASCII rendering of an [`Image`](crate::image::Image).
///
/// Holds exactly `height` rows of exactly `width` characters each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

impl AsciiGrid {
    /// Assemble a grid from pre-built rows.
    ///
    /// # Panics
    /// If the row count or any row length disagrees with the dimensions.
    pub fn from_rows(width: usize, height: usize, rows: Vec<String>) -> Self {
        assert_eq!(rows.len(), height, "grid must have one row per image row");
        for row in &rows {
            assert_eq!(row.chars().count(), width, "grid row has wrong length");
        }
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Character at (`row`, `col`), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.chars().nth(col)
    }
}
