use crate::error::{Error, Result};
use crate::tiler::Axis;

use super::rect::Rect;

/// Owned 2-D pixel grid with interleaved channels
///
/// Pixels are stored row-major; each pixel is `channels` consecutive
/// elements of `T`. The element type carries the bit depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T = u8> {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Raster<T> {
    /// Create a raster filled with `T::default()`
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![T::default(); width * height * channels],
        }
    }

    /// Wrap an existing buffer, checking its length against the shape
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<T>) -> Result<Self> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get raster width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get raster height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Elements per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Extent along `axis`: width for horizontal splits, height for vertical
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent across `axis`
    pub fn cross_extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }

    /// The full raster as a rect at the origin
    pub fn rect(&self) -> Result<Rect> {
        Rect::from_extent(0, 0, self.width, self.height)
    }

    /// Pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.channels;
        Some(&self.data[start..start + self.channels])
    }

    /// Single element of channel `c` at (x, y)
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<T> {
        if c >= self.channels {
            return None;
        }
        self.pixel(x, y).map(|p| p[c])
    }

    /// Set channel `c` at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, c: usize, value: T) {
        if x >= self.width || y >= self.height || c >= self.channels {
            return;
        }
        self.data[(y * self.width + x) * self.channels + c] = value;
    }

    /// All elements of row `y`
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width * self.channels;
        Some(&self.data[y * stride..(y + 1) * stride])
    }

    /// Raw element buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw element buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the raster and return its buffer
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    fn check_region(&self, rect: &Rect) -> Result<()> {
        if self.rect()?.contains(rect) {
            Ok(())
        } else {
            Err(Error::RegionOutOfBounds {
                rect: *rect,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Copy the pixels under `rect` into a new raster
    pub fn crop(&self, rect: &Rect) -> Result<Raster<T>> {
        self.check_region(rect)?;
        let mut out = Raster::new(rect.width as usize, rect.height as usize, self.channels);
        out.copy_region(self, rect, 0, 0)?;
        Ok(out)
    }

    /// Copy `src_rect` of `src` so its top-left lands at (dst_x, dst_y)
    pub fn copy_region(
        &mut self,
        src: &Raster<T>,
        src_rect: &Rect,
        dst_x: usize,
        dst_y: usize,
    ) -> Result<()> {
        if src.channels != self.channels {
            return Err(Error::InvalidArgument(format!(
                "channel mismatch: source has {}, destination has {}",
                src.channels, self.channels
            )));
        }
        src.check_region(src_rect)?;
        let dst_rect = Rect::from_extent(
            dst_x,
            dst_y,
            src_rect.width as usize,
            src_rect.height as usize,
        )?;
        self.check_region(&dst_rect)?;

        let ch = self.channels;
        let run = src_rect.width as usize * ch;
        let (sx, sy) = (src_rect.x as usize, src_rect.y as usize);
        for dy in 0..src_rect.height as usize {
            let s = ((sy + dy) * src.width + sx) * ch;
            let d = ((dst_y + dy) * self.width + dst_x) * ch;
            self.data[d..d + run].copy_from_slice(&src.data[s..s + run]);
        }
        Ok(())
    }
}

impl<T: Copy + Default> Default for Raster<T> {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}
