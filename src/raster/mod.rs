//! Raster input
//!
//! [`PixelBuffer`] is the decoded, row-major RGB image handed to the
//! quantizer. Decoding and resizing go through the `image` crate.

pub mod quantize;

use std::path::Path;

use image::imageops::FilterType;
use image::RgbImage;
use log::{debug, info};

use crate::core::Rgb;
use crate::error::{Error, Result};

pub use quantize::{quantize, QuantizeOptions, RenderedRow};

/// A decoded RGB image, origin top-left, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer; `pixels` must hold exactly `width * height` entries
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// A buffer of one colour
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// Decode an image file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgb8();
        info!("Opened image {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::from(&image))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`, if in bounds
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Resize with the image crate's triangle filter. Either dimension may
    /// be omitted, in which case it follows the aspect ratio.
    pub fn resized(&self, width: Option<u32>, height: Option<u32>) -> Self {
        let Some((w, h)) = fit_dimensions(self.width as u32, self.height as u32, width, height)
        else {
            return self.clone();
        };
        if self.is_empty() {
            return self.clone();
        }
        let resized = image::imageops::resize(&self.to_image(), w, h, FilterType::Triangle);
        debug!("Resized image from {}x{} to {}x{}", self.width, self.height, w, h);
        Self::from(&resized)
    }

    fn to_image(&self) -> RgbImage {
        let raw = self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
        // Length is width * height * 3 by construction
        RgbImage::from_raw(self.width as u32, self.height as u32, raw)
            .unwrap_or_else(|| RgbImage::new(self.width as u32, self.height as u32))
    }
}

impl From<&RgbImage> for PixelBuffer {
    fn from(image: &RgbImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.pixels().map(|p| Rgb::from(p.0)).collect(),
        }
    }
}

/// Target size for a resize request, or `None` when nothing was requested.
///
/// With only one side given, the other is scaled by the original aspect
/// ratio and truncated, never below one pixel.
pub fn fit_dimensions(
    orig_width: u32,
    orig_height: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> Option<(u32, u32)> {
    let scaled = |given: u32, this: u32, other: u32| -> u32 {
        if this == 0 {
            return given;
        }
        ((u64::from(given) * u64::from(other) / u64::from(this)) as u32).max(1)
    };
    match (width, height) {
        (Some(w), Some(h)) => Some((w.max(1), h.max(1))),
        (Some(w), None) => Some((w.max(1), scaled(w, orig_width, orig_height))),
        (None, Some(h)) => Some((scaled(h, orig_height, orig_width), h.max(1))),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![Rgb::BLACK; 4]).is_ok());
        match PixelBuffer::new(2, 2, vec![Rgb::BLACK; 3]) {
            Err(Error::BufferSize { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(PixelBuffer::new(0, 0, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_get_and_row() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0));
        assert_eq!(buf.get(2, 1), Some(Rgb::new(2, 1, 0)));
        assert_eq!(buf.get(3, 0), None);
        assert_eq!(buf.row(1)[0], Rgb::new(0, 1, 0));
    }

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(fit_dimensions(200, 100, None, None), None);
        assert_eq!(fit_dimensions(200, 100, Some(50), Some(60)), Some((50, 60)));
        assert_eq!(fit_dimensions(200, 100, Some(80), None), Some((80, 40)));
        assert_eq!(fit_dimensions(200, 100, None, Some(30)), Some((60, 30)));
        // Truncates, never collapses to zero
        assert_eq!(fit_dimensions(300, 100, Some(100), None), Some((100, 33)));
        assert_eq!(fit_dimensions(1000, 1, Some(10), None), Some((10, 1)));
    }

    #[test]
    fn test_resized() {
        let buf = PixelBuffer::filled(40, 20, Rgb::new(10, 20, 30));
        let small = buf.resized(Some(8), None);
        assert_eq!((small.width(), small.height()), (8, 4));
        assert_eq!(small.get(3, 2), Some(Rgb::new(10, 20, 30)));
        assert_eq!(buf.resized(None, None), buf);
    }

    #[test]
    fn test_from_rgb_image() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(1, 0, image::Rgb([1, 2, 3]));
        let buf = PixelBuffer::from(&image);
        assert_eq!(buf.get(1, 0), Some(Rgb::new(1, 2, 3)));
        assert_eq!(buf.get(0, 0), Some(Rgb::BLACK));
    }
}
