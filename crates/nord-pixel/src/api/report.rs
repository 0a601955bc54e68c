//! Metadata describing one conversion.

use serde::Serialize;

use crate::reduce::ReductionStrategy;

/// Sizes and parameters of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Source image width in pixels.
    pub original_width: u32,
    /// Source image height in pixels.
    pub original_height: u32,
    /// Output image width in pixels.
    pub output_width: u32,
    /// Output image height in pixels.
    pub output_height: u32,
    /// Number of block columns.
    pub blocks_x: u32,
    /// Number of block rows.
    pub blocks_y: u32,
    /// Block edge length in source pixels.
    pub pixel_size: u32,
    /// Border width in output pixels (0 = no gap).
    pub gap: u32,
    /// Reduction strategy that produced the block colors.
    pub strategy: ReductionStrategy,
}

impl ConversionReport {
    /// True when the source was smaller than one block and the output has
    /// no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output_width == 0 || self.output_height == 0
    }

    /// Fraction of source pixels that fell outside the whole-block crop.
    pub fn cropped_fraction(&self) -> f64 {
        let source = self.original_width as f64 * self.original_height as f64;
        if source == 0.0 {
            return 0.0;
        }
        let kept = self.output_width as f64 * self.output_height as f64;
        1.0 - kept / source
    }
}
