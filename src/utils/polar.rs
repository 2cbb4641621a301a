//! Ring-to-strip unwrapping
//!
//! A [`RemapTable`] stores, for every output pixel, the source coordinate
//! it samples. Building the table is the expensive part and is done once
//! per camera geometry; applying it is a cheap per-frame lookup.

use rayon::prelude::*;
use tracing::debug;

use super::trig::{fast_cos, fast_sin};
use crate::error::{Error, Result};
use crate::models::{Point, PointI, Raster};

/// Ring geometry to unwrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarUnwrap {
    /// Ring centre in source pixels
    pub center: PointI,
    /// Inner radius
    pub min_radius: i32,
    /// Outer radius; clamped to the nearest image edge
    pub max_radius: i32,
    /// Output width; defaults to the mid-ring circumference
    pub width: Option<usize>,
    /// Output height; defaults to the ring thickness
    pub height: Option<usize>,
}

impl PolarUnwrap {
    /// Ring with default output size
    pub fn new(center: PointI, min_radius: i32, max_radius: i32) -> Self {
        Self {
            center,
            min_radius,
            max_radius,
            width: None,
            height: None,
        }
    }
}

/// Per-pixel source coordinates for a geometric remap
#[derive(Debug, Clone, PartialEq)]
pub struct RemapTable {
    map_x: Raster<f32>,
    map_y: Raster<f32>,
}

impl RemapTable {
    /// Table that unwraps a ring clockwise, starting straight below the
    /// centre; output row 0 is the outer edge
    pub fn polar_unwrap(
        params: &PolarUnwrap,
        image_width: usize,
        image_height: usize,
    ) -> Result<Self> {
        let PointI { x: cx, y: cy } = params.center;
        if cx < 0 || cy < 0 || cx >= image_width as i32 || cy >= image_height as i32 {
            return Err(Error::InvalidArgument(format!(
                "ring centre ({}, {}) outside {}x{} image",
                cx, cy, image_width, image_height
            )));
        }
        if params.min_radius < 0 || params.max_radius < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative ring radius ({}, {})",
                params.min_radius, params.max_radius
            )));
        }

        let (mut min_r, mut max_r) = (params.min_radius, params.max_radius);
        if min_r > max_r {
            debug!(min_r, max_r, "inner radius larger than outer, swapping");
            std::mem::swap(&mut min_r, &mut max_r);
        }

        let edge = cx
            .min(cy)
            .min(image_width as i32 - cx)
            .min(image_height as i32 - cy);
        if max_r > edge {
            debug!(max_r, edge, "outer radius clamped to image edge");
            max_r = edge;
        }
        min_r = min_r.min(max_r);

        let width = params
            .width
            .unwrap_or(((max_r + min_r) as f32 * std::f32::consts::PI) as usize);
        let height = params.height.unwrap_or((max_r - min_r) as usize);
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "empty unwrap output {}x{} for radii ({}, {})",
                width, height, min_r, max_r
            )));
        }

        let mut map_x = Raster::<f32>::new(width, height, 1);
        let mut map_y = Raster::<f32>::new(width, height, 1);
        let d_theta = -2.0 * std::f32::consts::PI / width as f32;
        let (fx, fy) = (cx as f32, cy as f32);

        map_x
            .as_mut_slice()
            .par_chunks_mut(width)
            .zip(map_y.as_mut_slice().par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (row_x, row_y))| {
                let r = (min_r + height as i32 - y as i32) as f32;
                for x in 0..width {
                    let theta = d_theta * x as f32;
                    row_x[x] = fx + r * fast_sin(theta);
                    row_y[x] = fy + r * fast_cos(theta);
                }
            });

        debug!(width, height, min_r, max_r, "built polar remap table");
        Ok(Self { map_x, map_y })
    }

    /// Output width
    pub fn width(&self) -> usize {
        self.map_x.width()
    }

    /// Output height
    pub fn height(&self) -> usize {
        self.map_x.height()
    }

    /// Source coordinate sampled by output pixel (x, y)
    pub fn source_point(&self, x: usize, y: usize) -> Option<Point> {
        Some(Point::new(self.map_x.get(x, y, 0)?, self.map_y.get(x, y, 0)?))
    }

    /// Horizontal source coordinates
    pub fn map_x(&self) -> &Raster<f32> {
        &self.map_x
    }

    /// Vertical source coordinates
    pub fn map_y(&self) -> &Raster<f32> {
        &self.map_y
    }

    /// Resample `src` through the table with nearest-neighbour lookup
    ///
    /// Output pixels whose source falls outside `src` stay at
    /// `T::default()`.
    pub fn apply<T: Copy + Default + Send + Sync>(&self, src: &Raster<T>) -> Raster<T> {
        let (width, height) = (self.width(), self.height());
        let ch = src.channels();
        let mut out = Raster::<T>::new(width, height, ch);
        if width == 0 || ch == 0 {
            return out;
        }

        let (sw, sh) = (src.width() as i32, src.height() as i32);
        let map_x = self.map_x.as_slice();
        let map_y = self.map_y.as_slice();

        out.as_mut_slice()
            .par_chunks_mut(width * ch)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width {
                    let idx = y * width + x;
                    let p = Point::new(map_x[idx], map_y[idx]).round();
                    if p.x < 0 || p.y < 0 || p.x >= sw || p.y >= sh {
                        continue;
                    }
                    if let Some(pixel) = src.pixel(p.x as usize, p.y as usize) {
                        row[x * ch..(x + 1) * ch].copy_from_slice(pixel);
                    }
                }
            });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let table =
            RemapTable::polar_unwrap(&PolarUnwrap::new(PointI::new(100, 100), 20, 60), 200, 200)
                .unwrap();
        assert_eq!(table.width(), (80.0 * std::f32::consts::PI) as usize);
        assert_eq!(table.height(), 40);
    }

    #[test]
    fn test_first_row_on_outer_ring() {
        let center = PointI::new(100, 80);
        let table =
            RemapTable::polar_unwrap(&PolarUnwrap::new(center, 10, 50), 200, 160).unwrap();
        for x in 0..table.width() {
            let p = table.source_point(x, 0).unwrap();
            let r = p.distance(&center.to_f32());
            assert!((r - 50.0).abs() <= 0.07 * 50.0, "x={} r={}", x, r);
        }
        // column 0 points straight down from the centre
        let p = table.source_point(0, 0).unwrap();
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!(p.y > 125.0);
    }

    #[test]
    fn test_radii_swapped_and_clamped() {
        let table =
            RemapTable::polar_unwrap(&PolarUnwrap::new(PointI::new(30, 50), 90, 10), 100, 100)
                .unwrap();
        // outer radius limited by the left edge at distance 30
        assert_eq!(table.height(), 20);
    }

    #[test]
    fn test_invalid_geometry() {
        let outside = PolarUnwrap::new(PointI::new(-1, 10), 5, 10);
        assert!(RemapTable::polar_unwrap(&outside, 100, 100).is_err());

        let on_edge = PolarUnwrap::new(PointI::new(0, 50), 5, 10);
        assert!(RemapTable::polar_unwrap(&on_edge, 100, 100).is_err());
    }

    #[test]
    fn test_apply_samples_source() {
        let mut src = Raster::<u8>::new(64, 64, 1);
        for y in 0..64 {
            for x in 0..64 {
                let d = (((x as f32 - 32.0).powi(2) + (y as f32 - 32.0).powi(2)).sqrt()) as u8;
                src.set(x, y, 0, d);
            }
        }
        let params = PolarUnwrap {
            width: Some(90),
            ..PolarUnwrap::new(PointI::new(32, 32), 4, 28)
        };
        let table = RemapTable::polar_unwrap(&params, 64, 64).unwrap();
        let out = table.apply(&src);
        assert_eq!((out.width(), out.height()), (90, 24));
        // straight below the centre the distance is exact
        let top = out.get(0, 0, 0).unwrap();
        assert!((27..=29).contains(&top), "top={}", top);
    }
}
