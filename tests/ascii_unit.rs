//! Unit tests for the ASCII mapper.
//!
//! These tests verify the core mapping contract:
//! - Ramp contents and endpoints
//! - Per-pixel mapping determinism and monotonicity
//! - Grid shape for assorted image sizes

use foo2ascii::ascii::*;
use foo2ascii::image::Image;
use std::collections::HashSet;

fn make_image(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Image {
    let mut pixels = Vec::with_capacity(width * height);
    for r in 0..height {
        for c in 0..width {
            pixels.push(f(r, c));
        }
    }
    Image::new(width, height, pixels).unwrap()
}

// ==================== Mapping Tests ====================

#[test]
fn test_map_black_is_densest() {
    assert_eq!(map_pixel(0), DENSITY_RAMP[0]);
    assert_eq!(map_pixel(0), '$');
}

#[test]
fn test_map_white_is_sparsest() {
    assert_eq!(map_pixel(255), *DENSITY_RAMP.last().unwrap());
    assert_eq!(map_pixel(255), '.');
}

#[test]
fn test_map_is_deterministic() {
    for v in 0..=255u8 {
        assert_eq!(map_pixel(v), map_pixel(v));
    }
}

#[test]
fn test_map_uses_every_glyph() {
    // Every ramp glyph is reachable from some intensity
    let used: HashSet<char> = (0..=255u8).map(map_pixel).collect();
    assert_eq!(used.len(), RAMP_LEN);
}

#[test]
fn test_ramp_index_formula() {
    for v in 0..=255u8 {
        let raw = v as usize * (INDEX_LEVELS - 1) / 255;
        assert_eq!(ramp_index(v), raw.min(RAMP_LEN - 1));
    }
}

// ==================== Grid Tests ====================

#[test]
fn test_grid_shape_matches_image() {
    for &(w, h) in &[(1, 1), (3, 7), (16, 2), (0, 4), (5, 0)] {
        let image = make_image(w, h, |r, c| ((r * 31 + c * 7) % 256) as u8);
        let grid = to_grid(&image);
        assert_eq!(grid.height(), h);
        assert_eq!(grid.rows().len(), h);
        for row in grid.rows() {
            assert_eq!(row.chars().count(), w);
        }
    }
}

#[test]
fn test_grid_cell_derives_from_pixel() {
    let image = make_image(8, 4, |r, c| (r * 60 + c * 5) as u8);
    let grid = to_grid(&image);
    for r in 0..4 {
        for c in 0..8 {
            assert_eq!(grid.get(r, c), Some(map_pixel(image.get(r, c).unwrap())));
        }
    }
}

#[test]
fn test_horizontal_gradient_darkens_left() {
    // Left dark, right bright
    let image = make_image(64, 1, |_, c| (c * 4) as u8);
    let grid = to_grid(&image);
    let row: Vec<char> = grid.rows()[0].chars().collect();
    assert_eq!(row[0], '$');
    let first = DENSITY_RAMP.iter().position(|&g| g == row[0]).unwrap();
    let last = DENSITY_RAMP.iter().position(|&g| g == row[63]).unwrap();
    assert!(last > first);
}

#[test]
fn test_grid_has_no_line_terminators() {
    let image = make_image(10, 10, |r, c| (r * 25 + c) as u8);
    let grid = to_grid(&image);
    for row in grid.rows() {
        assert!(!row.contains('\n'));
        assert!(!row.contains('\r'));
        assert!(row.chars().all(|ch| ch.is_ascii_graphic()));
    }
}
