//! rust_tiler - overlapping strip tiling for camera images
//!
//! Splits a raster into column or row strips that overlap their neighbours
//! by a fixed margin, so each strip can be processed independently, and
//! merges the processed strips back into one raster. Small helpers used
//! alongside it in a vision pipeline (rect geometry, polar unwrap tables,
//! profile filters, timing, image I/O) live in [`utils`].

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults and tiler settings
pub mod config;
/// Error type and result alias
pub mod error;
/// Subscriber setup for applications embedding the crate
pub mod logging;
/// Core data structures (Raster, Rect, Point)
pub mod models;
/// Strip split and merge
pub mod tiler;
/// Utility functions (geometry, polar remap, filters, timing, conversion)
pub mod utils;

pub use config::TilerConfig;
pub use error::{Error, Result};
pub use models::{Point, PointI, Raster, Rect};
pub use tiler::{Axis, Span, StripSet, Tiler};

/// Split a raster into overlapping strips
///
/// # Arguments
/// * `raster` - Source raster; it is only read
/// * `cut_lines` - Offsets along `axis` at which to cut; out-of-range
///   values are clamped to the usable interior
/// * `axis` - `Horizontal` for column strips, `Vertical` for row strips
/// * `margin` - Overlap added on each side of every cut
///
/// # Returns
/// `cut_lines.len() + 1` strips in cut order
pub fn split<T: Copy + Default>(
    raster: &Raster<T>,
    cut_lines: &[i64],
    axis: Axis,
    margin: usize,
) -> Result<StripSet<T>> {
    tiler::split(raster, cut_lines, axis, margin)
}

/// Merge strips produced by [`split`] with the same `axis` and `margin`
pub fn merge<T: Copy + Default>(
    strips: &StripSet<T>,
    axis: Axis,
    margin: usize,
) -> Result<Raster<T>> {
    tiler::merge(strips.strips(), axis, margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: usize, height: usize) -> Raster<u8> {
        let mut raster = Raster::new(width, height, 3);
        for y in 0..height {
            for x in 0..width {
                raster.set(x, y, 0, (x % 251) as u8);
                raster.set(x, y, 1, (y % 241) as u8);
                raster.set(x, y, 2, ((x + y) % 2) as u8 * 255);
            }
        }
        raster
    }

    #[test]
    fn test_split_merge_horizontal() {
        let raster = checker(1000, 1000);
        let cuts = [100, 300, 500, 800, 900];
        let strips = split(&raster, &cuts, Axis::Horizontal, 5).unwrap();
        assert_eq!(strips.len(), cuts.len() + 1);
        assert_eq!(strips.get(0).unwrap().width(), 105);

        let merged = merge(&strips, Axis::Horizontal, 5).unwrap();
        assert_eq!(merged.width(), 1000);
        assert_eq!(merged, raster);
    }

    #[test]
    fn test_split_merge_vertical() {
        let raster = checker(1000, 1000);
        let strips = split(&raster, &[100, 300, 500, 800, 900], Axis::Vertical, 5).unwrap();
        let merged = merge(&strips, Axis::Vertical, 5).unwrap();
        assert_eq!(merged.height(), 1000);
        assert_eq!(merged, raster);
    }
}
