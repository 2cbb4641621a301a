//! Boundary arithmetic shared by split and merge

use crate::error::{Error, Result};

/// Position of one strip along the split axis, in source coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First source index covered by the strip (margin included)
    pub start: usize,
    /// Strip length along the axis (margin included on both sides)
    pub len: usize,
}

impl Span {
    /// One past the last covered source index
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Clamp a cut into `[lo, hi]`
fn clamp_cut(cut: i64, lo: usize, hi: usize) -> usize {
    cut.clamp(lo as i64, hi as i64) as usize
}

/// Build `[margin] ++ clamp(cuts) ++ [extent - margin]`
///
/// Cuts outside `[margin, extent - margin - 1]` are pulled onto the nearest
/// bound. Fails when that interior is empty.
pub fn boundaries(extent: usize, cut_lines: &[i64], margin: usize) -> Result<Vec<usize>> {
    if margin >= extent.div_ceil(2) {
        return Err(Error::InvalidArgument(format!(
            "extent {} too small for margin {}",
            extent, margin
        )));
    }
    let lo = margin;
    let hi = extent - margin - 1;

    let mut lines = Vec::with_capacity(cut_lines.len() + 2);
    lines.push(lo);
    lines.extend(cut_lines.iter().map(|&c| clamp_cut(c, lo, hi)));
    lines.push(hi + 1);
    Ok(lines)
}

/// Compute the span of every strip a split would produce
///
/// Each strip runs from `prev - margin` to `next + margin` for consecutive
/// boundaries, so neighbours overlap by `2 * margin` and the outer strips
/// end flush with the raster edges.
pub fn strip_spans(extent: usize, cut_lines: &[i64], margin: usize) -> Result<Vec<Span>> {
    let lines = boundaries(extent, cut_lines, margin)?;

    lines
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (prev, next) = (pair[0], pair[1]);
            if next < prev {
                return Err(Error::InvalidArgument(format!(
                    "cut lines out of order at index {}: {} follows {}",
                    i, next, prev
                )));
            }
            Ok(Span {
                start: prev - margin,
                len: next - prev + 2 * margin,
            })
        })
        .collect()
}
