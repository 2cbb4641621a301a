use std::fmt;

use super::point::PointI;
use crate::error::{Error, Result};

/// Axis-aligned integer rectangle
///
/// The origin may be negative, so a rect can describe a region that only
/// partly overlaps an image. `width`/`height` of zero or less is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from unsigned pixel offsets
    ///
    /// Fails when an edge or the far corner does not fit in `i32`.
    pub fn from_extent(x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        let coord = |value: usize| {
            i32::try_from(value)
                .map_err(|_| Error::InvalidArgument(format!("offset {} exceeds i32", value)))
        };
        let rect = Self::new(coord(x)?, coord(y)?, coord(width)?, coord(height)?);
        coord(x.saturating_add(width))?;
        coord(y.saturating_add(height))?;
        Ok(rect)
    }

    /// Top-left corner
    pub fn tl(&self) -> PointI {
        PointI::new(self.x, self.y)
    }

    /// Bottom-right corner (exclusive)
    pub fn br(&self) -> PointI {
        PointI::new(self.x + self.width, self.y + self.height)
    }

    /// Number of pixels covered, 0 when empty
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// True when the rect covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shift the rect by `offset`
    pub fn translate(&self, offset: PointI) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// True when `other` lies entirely inside `self`
    pub fn contains(&self, other: &Rect) -> bool {
        !other.is_empty()
            && other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// Overlap of two rects; the empty default rect when they do not meet
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Smallest rect containing both; an empty operand is ignored
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width).max(other.x + other.width);
        let y1 = (self.y + self.height).max(other.y + other.height);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
