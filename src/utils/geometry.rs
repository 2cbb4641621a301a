//! Rectangle helpers for regions of interest
use crate::error::{Error, Result};
use crate::models::{PointI, Rect};

/// Expansion applied by [`offset_rect`]
pub const TRACK_MARGIN: i32 = 5;

/// Parse `"x, y, w, h"`; commas and spaces both separate fields
pub fn parse_rect(input: &str) -> Result<Rect> {
    let fields: Vec<&str> = input
        .split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if fields.len() != 4 {
        return Err(Error::RectParse {
            input: input.to_string(),
            reason: format!("expected 4 fields, found {}", fields.len()),
        });
    }

    let mut values = [0i32; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| Error::RectParse {
            input: input.to_string(),
            reason: format!("'{}' is not an integer", field),
        })?;
    }
    Ok(Rect::new(values[0], values[1], values[2], values[3]))
}

/// Rect covering a whole `width` x `height` image
pub fn image_rect(width: usize, height: usize) -> Rect {
    Rect::new(0, 0, width as i32, height as i32)
}

/// Largest centred square inside a `width` x `height` image
pub fn square_rect(width: usize, height: usize) -> Rect {
    let len = width.min(height) as i32;
    let x = (width as i32 - len) / 2;
    let y = (height as i32 - len) / 2;
    Rect::new(x, y, len, len)
}

/// Rect of `size` centred in `bounds`, clipped to `bounds`
///
/// Without a size, the square of side `min(bounds.width, bounds.height)`
/// is used.
pub fn center_rect(bounds: &Rect, size: Option<(i32, i32)>) -> Rect {
    let (w, h) = size.unwrap_or_else(|| {
        let side = bounds.width.min(bounds.height);
        (side, side)
    });
    Rect::new(
        bounds.x + (bounds.width - w) / 2,
        bounds.y + (bounds.height - h) / 2,
        w,
        h,
    )
    .intersection(bounds)
}

/// Per-side expansion in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    /// Added above
    pub top: i32,
    /// Added to the left
    pub left: i32,
    /// Added below
    pub bottom: i32,
    /// Added to the right
    pub right: i32,
}

impl Margins {
    /// Explicit value for every side
    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same value on all four sides
    pub fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// `vertical` above and below, `horizontal` left and right
    pub fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Grow `rect` by `margins`; the result always contains `rect`
pub fn margin_rect(rect: &Rect, margins: Margins) -> Rect {
    Rect::new(
        rect.x - margins.left,
        rect.y - margins.top,
        rect.width + margins.left + margins.right,
        rect.height + margins.top + margins.bottom,
    )
    .union(rect)
}

/// Search window covering `rect` and where it was one step ago
///
/// `offset` is the motion of the region since the previous frame; the
/// previous position is padded by [`TRACK_MARGIN`].
pub fn offset_rect(rect: &Rect, offset: PointI) -> Rect {
    let previous = rect.translate(PointI::new(-offset.x, -offset.y));
    margin_rect(&previous, Margins::uniform(TRACK_MARGIN)).union(rect)
}
