//! Bridge between [`Raster`] and the `image` crate
//!
//! Channel counts map onto formats as 1 → Luma8, 3 → Rgb8, 4 → Rgba8.

use std::path::Path;

use image::{DynamicImage, GenericImageView, GrayImage, RgbImage, RgbaImage};

use crate::error::{Error, Result};
use crate::models::Raster;

fn dimension(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::InvalidArgument(format!("dimension {} exceeds u32", value)))
}

/// Copy a raster into an owned `DynamicImage`
pub fn to_dynamic_image(raster: &Raster<u8>) -> Result<DynamicImage> {
    let (w, h) = (dimension(raster.width())?, dimension(raster.height())?);
    let data = raster.as_slice().to_vec();
    let image = match raster.channels() {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        n => return Err(Error::UnsupportedChannels(n)),
    };
    image.ok_or(Error::BufferSize {
        expected: raster.width() * raster.height() * raster.channels(),
        actual: raster.as_slice().len(),
    })
}

/// Copy a Luma8/Rgb8/Rgba8 image into a raster
pub fn from_dynamic_image(image: &DynamicImage) -> Result<Raster<u8>> {
    let (channels, data) = match image {
        DynamicImage::ImageLuma8(buf) => (1, buf.as_raw().clone()),
        DynamicImage::ImageRgb8(buf) => (3, buf.as_raw().clone()),
        DynamicImage::ImageRgba8(buf) => (4, buf.as_raw().clone()),
        other => return Err(Error::UnsupportedColor(format!("{:?}", other.color()))),
    };
    let (w, h) = image.dimensions();
    Raster::from_vec(w as usize, h as usize, channels, data)
}

/// Decode an image file; formats outside the channel table become RGBA8
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster<u8>> {
    let image = image::open(path)?;
    match from_dynamic_image(&image) {
        Err(Error::UnsupportedColor(_)) => {
            from_dynamic_image(&DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        result => result,
    }
}

/// Encode a raster; the format follows the file extension
pub fn save_raster<P: AsRef<Path>>(raster: &Raster<u8>, path: P) -> Result<()> {
    to_dynamic_image(raster)?.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_image() {
        let data: Vec<u8> = (0..4 * 3 * 3).map(|v| v as u8).collect();
        let raster = Raster::from_vec(4, 3, 3, data).unwrap();
        let image = to_dynamic_image(&raster).unwrap();
        assert!(matches!(image, DynamicImage::ImageRgb8(_)));
        assert_eq!(from_dynamic_image(&image).unwrap(), raster);
    }

    #[test]
    fn test_unsupported_channels() {
        let raster = Raster::<u8>::new(2, 2, 2);
        assert!(matches!(
            to_dynamic_image(&raster),
            Err(Error::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_unsupported_color() {
        let image = DynamicImage::new_luma16(2, 2);
        assert!(matches!(
            from_dynamic_image(&image),
            Err(Error::UnsupportedColor(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let raster = Raster::from_vec(3, 2, 1, vec![0, 50, 100, 150, 200, 250]).unwrap();
        save_raster(&raster, &path).unwrap();
        assert_eq!(load_raster(&path).unwrap(), raster);
    }
}
