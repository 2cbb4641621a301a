use tracing::{debug, error};

use super::Axis;
use crate::error::{Error, Result};
use crate::models::{Raster, Rect};

/// Band `[start, start + len)` along `axis`, full extent across it
fn band(axis: Axis, start: usize, len: usize, cross: usize) -> Result<Rect> {
    match axis {
        Axis::Horizontal => Rect::from_extent(start, 0, len, cross),
        Axis::Vertical => Rect::from_extent(0, start, cross, len),
    }
}

fn place<T: Copy + Default>(
    dst: &mut Raster<T>,
    src: &Raster<T>,
    axis: Axis,
    src_start: usize,
    dst_start: usize,
    len: usize,
) -> Result<()> {
    if len == 0 {
        return Ok(());
    }
    let rect = band(axis, src_start, len, src.cross_extent(axis))?;
    match axis {
        Axis::Horizontal => dst.copy_region(src, &rect, dst_start, 0),
        Axis::Vertical => dst.copy_region(src, &rect, 0, dst_start),
    }
}

fn check_shapes<T: Copy + Default>(
    strips: &[Raster<T>],
    axis: Axis,
    margin: usize,
) -> Result<()> {
    let first = &strips[0];
    for (i, strip) in strips.iter().enumerate() {
        if strip.channels() != first.channels()
            || strip.cross_extent(axis) != first.cross_extent(axis)
        {
            return Err(Error::InvalidArgument(format!(
                "strip {} is {}x{}x{}, expected cross extent {} with {} channels",
                i,
                strip.width(),
                strip.height(),
                strip.channels(),
                first.cross_extent(axis),
                first.channels()
            )));
        }
        if strip.extent(axis) / 2 < margin {
            return Err(Error::InvalidArgument(format!(
                "strip {} extent {} shorter than twice the margin {}",
                i,
                strip.extent(axis),
                margin
            )));
        }
    }
    Ok(())
}

fn assemble<T: Copy + Default>(
    strips: &[Raster<T>],
    axis: Axis,
    margin: usize,
) -> Result<Raster<T>> {
    if strips.is_empty() {
        return Err(Error::InvalidArgument("no strips to merge".to_string()));
    }
    check_shapes(strips, axis, margin)?;

    let first = &strips[0];
    let last = &strips[strips.len() - 1];
    let cross = first.cross_extent(axis);
    let total: usize = strips
        .iter()
        .map(|s| s.extent(axis) - 2 * margin)
        .sum::<usize>()
        + 2 * margin;

    let mut out = match axis {
        Axis::Horizontal => Raster::new(total, cross, first.channels()),
        Axis::Vertical => Raster::new(cross, total, first.channels()),
    };

    // Outer margins come from the first and last strip only
    place(&mut out, first, axis, 0, 0, margin)?;

    let mut offset = margin;
    for strip in strips {
        let interior = strip.extent(axis) - 2 * margin;
        place(&mut out, strip, axis, margin, offset, interior)?;
        offset += interior;
    }

    place(&mut out, last, axis, last.extent(axis) - margin, offset, margin)?;
    Ok(out)
}

/// Reassemble strips produced by a split with the same axis and margin
///
/// Only the interior of each strip is kept, plus the leading margin of the
/// first strip and the trailing margin of the last. Edits to the margin
/// bands of inner strips do not survive.
pub fn merge<T: Copy + Default>(
    strips: &[Raster<T>],
    axis: Axis,
    margin: usize,
) -> Result<Raster<T>> {
    let merged = assemble(strips, axis, margin).inspect_err(|err| {
        error!(?axis, margin, strips = strips.len(), "merge failed: {}", err);
    })?;

    debug!(
        ?axis,
        margin,
        strips = strips.len(),
        width = merged.width(),
        height = merged.height(),
        "merged strips"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: usize, height: usize, value: u8) -> Raster<u8> {
        Raster::from_vec(width, height, 1, vec![value; width * height]).unwrap()
    }

    #[test]
    fn test_merge_empty_fails() {
        let err = merge::<u8>(&[], Axis::Horizontal, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_merge_width() {
        let strips = vec![filled(105, 8, 1), filled(210, 8, 2), filled(105, 8, 3)];
        let merged = merge(&strips, Axis::Horizontal, 5).unwrap();
        assert_eq!((merged.width(), merged.height()), (400, 8));
    }

    #[test]
    fn test_merge_takes_margins_from_outer_strips() {
        let strips = vec![filled(2, 10, 1), filled(2, 10, 2), filled(2, 10, 3)];
        let merged = merge(&strips, Axis::Vertical, 2).unwrap();
        assert_eq!((merged.width(), merged.height()), (2, 22));

        let column: Vec<u8> = (0..22).map(|y| merged.get(0, y, 0).unwrap()).collect();
        let mut expected = vec![1u8; 8];
        expected.extend([2u8; 6]);
        expected.extend([3u8; 8]);
        assert_eq!(column, expected);
    }

    #[test]
    fn test_merge_rejects_mismatched_strips() {
        let strips = vec![filled(20, 8, 1), filled(20, 9, 1)];
        assert!(merge(&strips, Axis::Horizontal, 2).is_err());

        let short = vec![filled(20, 8, 1), filled(3, 8, 1)];
        assert!(merge(&short, Axis::Horizontal, 2).is_err());
    }

    #[test]
    fn test_merge_huge_margin_rejected() {
        let strips = vec![filled(10, 10, 1)];
        let err = merge(&strips, Axis::Horizontal, usize::MAX / 2 + 1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = merge(&strips, Axis::Vertical, usize::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_merge_zero_margin() {
        let strips = vec![filled(3, 2, 1), filled(4, 2, 2)];
        let merged = merge(&strips, Axis::Horizontal, 0).unwrap();
        assert_eq!(merged.width(), 7);
        assert_eq!(merged.get(3, 1, 0), Some(2));
    }
}
