//! Unified error type for the nord-pixel public API.

use thiserror::Error;

/// Unified error type for the nord-pixel public API.
///
/// # Example
///
/// ```
/// use nord_pixel::{ConvertError, NordConverter, Rgb, RgbBuffer};
///
/// let image = RgbBuffer::new(8, 8, Rgb::new(0, 0, 0));
/// let err = NordConverter::nord().pixel_size(0).convert(&image).unwrap_err();
/// assert!(matches!(err, ConvertError::InvalidPixelSize(0)));
/// ```
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Block size must be at least one pixel
    #[error("invalid pixel size {0}: must be at least 1")]
    InvalidPixelSize(u32),

    /// The output canvas would not fit in `u32` dimensions
    #[error("output canvas too large: {blocks_x}x{blocks_y} blocks of {pixel_size}px")]
    CanvasTooLarge {
        blocks_x: u32,
        blocks_y: u32,
        pixel_size: u32,
    },

    /// The resample strategy could not build its working image
    #[error("resample error: {0}")]
    Resample(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pixel_size_display() {
        let error = ConvertError::InvalidPixelSize(0);
        assert_eq!(error.to_string(), "invalid pixel size 0: must be at least 1");
    }

    #[test]
    fn test_canvas_too_large_display() {
        let error = ConvertError::CanvasTooLarge {
            blocks_x: 2,
            blocks_y: 1,
            pixel_size: 1 << 31,
        };
        assert_eq!(
            error.to_string(),
            "output canvas too large: 2x1 blocks of 2147483648px"
        );
    }

    #[test]
    fn test_resample_error_display() {
        let error = ConvertError::Resample("buffer too small".to_string());
        assert_eq!(error.to_string(), "resample error: buffer too small");
    }
}
