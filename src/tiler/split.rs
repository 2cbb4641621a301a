use tracing::{debug, error};

use super::bounds::{Span, strip_spans};
use super::{Axis, StripSet};
use crate::error::{Error, Result};
use crate::models::{Raster, Rect};

fn span_rect(span: &Span, axis: Axis, cross: usize) -> Result<Rect> {
    match axis {
        Axis::Horizontal => Rect::from_extent(span.start, 0, span.len, cross),
        Axis::Vertical => Rect::from_extent(0, span.start, cross, span.len),
    }
}

fn extract<T: Copy + Default>(
    raster: &Raster<T>,
    cut_lines: &[i64],
    axis: Axis,
    margin: usize,
) -> Result<Vec<Raster<T>>> {
    let spans = strip_spans(raster.extent(axis), cut_lines, margin)?;
    let cross = raster.cross_extent(axis);

    spans
        .iter()
        .map(|span| raster.crop(&span_rect(span, axis, cross)?))
        .collect()
}

/// Split `raster` into overlapping strips at `cut_lines`
///
/// `out` must be empty; on any failure it is left exactly as it was.
pub fn split_into<T: Copy + Default>(
    raster: &Raster<T>,
    cut_lines: &[i64],
    axis: Axis,
    margin: usize,
    out: &mut StripSet<T>,
) -> Result<()> {
    if !out.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "strip set already holds {} strips",
            out.len()
        )));
    }

    let strips = extract(raster, cut_lines, axis, margin).inspect_err(|err| {
        error!(?axis, margin, cuts = cut_lines.len(), "split failed: {}", err);
    })?;

    debug!(
        ?axis,
        margin,
        strips = strips.len(),
        width = raster.width(),
        height = raster.height(),
        "split raster"
    );
    *out = StripSet::from_strips(strips);
    Ok(())
}

/// Split `raster` into a fresh strip set
pub fn split<T: Copy + Default>(
    raster: &Raster<T>,
    cut_lines: &[i64],
    axis: Axis,
    margin: usize,
) -> Result<StripSet<T>> {
    let mut out = StripSet::new();
    split_into(raster, cut_lines, axis, margin, &mut out)?;
    Ok(out)
}
