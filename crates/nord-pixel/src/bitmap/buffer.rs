//! Owned row-major RGB pixel buffer.

use super::{Bitmap, BitmapMut};
use crate::color::Rgb;

/// A `width x height` grid of [`Rgb`] pixels stored row-major.
///
/// This is the output type of the reconstructor. A zero-area buffer is valid
/// and is what a source image smaller than one block produces; use
/// [`is_empty()`](Self::is_empty) to detect it.
///
/// # Example
///
/// ```
/// use nord_pixel::{Bitmap, BitmapMut, Rgb, RgbBuffer};
///
/// let mut buf = RgbBuffer::new(2, 1, Rgb::new(0, 0, 0));
/// buf.set(1, 0, Rgb::new(255, 255, 255));
///
/// assert_eq!(buf.to_rgb_bytes(), vec![0, 0, 0, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    /// Pixels, one per position, row-major order.
    pixels: Vec<Rgb>,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl RgbBuffer {
    /// Create a buffer with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            pixels: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(pixels: Vec<Rgb>, width: u32, height: u32) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Copy an arbitrary bitmap into an owned buffer.
    pub fn from_bitmap<B: Bitmap + ?Sized>(source: &B) -> Self {
        let (width, height) = (source.width(), source.height());
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(source.get(x, y).unwrap_or_default());
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns true when the buffer has no pixels (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            rgb.extend_from_slice(&pixel.to_bytes());
        }
        rgb
    }

    /// Convert into an [`image::RgbImage`] for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[self.index(x, y)].into()
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Bitmap for RgbBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }
}

impl BitmapMut for RgbBuffer {
    #[inline]
    fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        true
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
