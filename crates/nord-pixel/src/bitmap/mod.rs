//! In-memory bitmap access.
//!
//! The pipeline reads source pixels through [`Bitmap`] and paints output
//! pixels through [`BitmapMut`]. Both are bounds-checked: reads outside the
//! image return `None`, writes outside the image are ignored and return
//! `false`.
//!
//! Two implementations are provided:
//!
//! - [`RgbBuffer`]: the crate's own row-major pixel buffer, returned by the
//!   reconstructor
//! - [`image::RgbImage`]: so decoded images can be fed in without copying

mod buffer;

pub use buffer::RgbBuffer;

use crate::color::Rgb;

/// Read access to a 2D grid of colors.
pub trait Bitmap {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `(x, y)`, or `None` outside the image.
    fn get(&self, x: u32, y: u32) -> Option<Rgb>;
}

/// Write access to a 2D grid of colors.
pub trait BitmapMut: Bitmap {
    /// Set the color at `(x, y)`. Returns `false` (and does nothing) when
    /// the coordinate is outside the image.
    fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool;

    /// Set every pixel to `color`.
    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set(x, y, color);
            }
        }
    }

    /// Paint the `size x size` square whose top-left corner is `(left, top)`.
    ///
    /// Pixels falling outside the image are skipped.
    fn fill_square(&mut self, left: u32, top: u32, size: u32, color: Rgb) {
        for y in top..top.saturating_add(size) {
            for x in left..left.saturating_add(size) {
                self.set(x, y, color);
            }
        }
    }
}

impl Bitmap for image::RgbImage {
    #[inline]
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    #[inline]
    fn height(&self) -> u32 {
        self.dimensions().1
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.get_pixel_checked(x, y).map(|&p| Rgb::from(p))
    }
}

impl BitmapMut for image::RgbImage {
    #[inline]
    fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        match self.get_pixel_mut_checked(x, y) {
            Some(pixel) => {
                *pixel = color.into();
                true
            }
            None => false,
        }
    }
}
