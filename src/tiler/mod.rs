//! Overlapping strip split and merge
//!
//! A raster is cut at a list of offsets along one axis. Every strip is
//! padded with `margin` pixels of its neighbours on both sides so that
//! kernel operations run on a strip see valid context at the seams. The
//! outer strips are padded with the raster's own edge band instead, which
//! keeps split and merge exact inverses for untouched strips.

pub mod bounds;
pub mod merge;
pub mod split;

pub use bounds::{Span, strip_spans};
pub use merge::merge;
pub use split::{split, split_into};

use crate::config::TilerConfig;
use crate::error::Result;
use crate::models::Raster;

/// Direction of the split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Axis {
    /// Cut along columns, producing side-by-side column strips
    #[default]
    Horizontal,
    /// Cut along rows, producing stacked row strips
    Vertical,
}

/// Ordered strips produced by a split
#[derive(Debug, Clone, PartialEq)]
pub struct StripSet<T = u8> {
    strips: Vec<Raster<T>>,
}

impl<T> StripSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self { strips: Vec::new() }
    }

    /// Wrap an ordered list of strips
    pub fn from_strips(strips: Vec<Raster<T>>) -> Self {
        Self { strips }
    }

    /// Number of strips
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    /// True when the set holds no strips
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Strips in split order
    pub fn strips(&self) -> &[Raster<T>] {
        &self.strips
    }

    /// Mutable access, e.g. to process strips in place before merging
    pub fn strips_mut(&mut self) -> &mut [Raster<T>] {
        &mut self.strips
    }

    /// Strip at `index`
    pub fn get(&self, index: usize) -> Option<&Raster<T>> {
        self.strips.get(index)
    }

    /// Iterate strips in split order
    pub fn iter(&self) -> std::slice::Iter<'_, Raster<T>> {
        self.strips.iter()
    }

    /// Drop all strips so the set can be split into again
    pub fn clear(&mut self) {
        self.strips.clear();
    }

    /// Consume the set and return the strips
    pub fn into_inner(self) -> Vec<Raster<T>> {
        self.strips
    }
}

impl<T> Default for StripSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a StripSet<T> {
    type Item = &'a Raster<T>;
    type IntoIter = std::slice::Iter<'a, Raster<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.strips.iter()
    }
}

/// Splitter/merger bound to one axis and margin
///
/// # Example
/// ```
/// use rust_tiler::{Axis, Raster, Tiler};
///
/// let raster = Raster::<u8>::new(1000, 1000, 3);
/// let tiler = Tiler::new(Axis::Horizontal, 5);
/// let strips = tiler.split(&raster, &[100, 300, 500, 800, 900]).unwrap();
/// assert_eq!(strips.len(), 6);
///
/// let merged = tiler.merge(&strips).unwrap();
/// assert_eq!(merged.width(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiler {
    config: TilerConfig,
}

impl Tiler {
    /// Create a tiler with explicit settings
    pub fn new(axis: Axis, margin: usize) -> Self {
        Self {
            config: TilerConfig::new(axis, margin),
        }
    }

    /// Create a tiler from a config value
    pub fn with_config(config: TilerConfig) -> Self {
        Self { config }
    }

    /// Create a tiler from `TILER_AXIS` / `TILER_MARGIN`
    pub fn from_env() -> Self {
        Self::with_config(TilerConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> TilerConfig {
        self.config
    }

    /// Split into a fresh strip set
    pub fn split<T: Copy + Default>(
        &self,
        raster: &Raster<T>,
        cut_lines: &[i64],
    ) -> Result<StripSet<T>> {
        split(raster, cut_lines, self.config.axis, self.config.margin)
    }

    /// Split into `out`, which must be empty
    pub fn split_into<T: Copy + Default>(
        &self,
        raster: &Raster<T>,
        cut_lines: &[i64],
        out: &mut StripSet<T>,
    ) -> Result<()> {
        split_into(raster, cut_lines, self.config.axis, self.config.margin, out)
    }

    /// Merge strips split with this tiler's settings
    pub fn merge<T: Copy + Default>(&self, strips: &StripSet<T>) -> Result<Raster<T>> {
        merge(strips.strips(), self.config.axis, self.config.margin)
    }
}

impl Default for Tiler {
    fn default() -> Self {
        Self::from_env()
    }
}
