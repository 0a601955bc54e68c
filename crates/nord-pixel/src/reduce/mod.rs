//! Block reduction: one representative color per `pixel_size` square.
//!
//! The source image is cut into a grid of `blocks_x x blocks_y` squares where
//! `blocks_x = width / pixel_size` and `blocks_y = height / pixel_size`.
//! Pixels to the right of or below the last whole block are dropped.
//!
//! Two strategies are available through [`ReductionStrategy`]:
//!
//! - **Average** (default): box filter, per-channel mean truncated toward zero
//! - **Resample**: Lanczos3 downscale of the cropped image to the grid size
//!
//! The strategies agree exactly on uniform images and differ slightly
//! elsewhere, since Lanczos3 reaches into neighbouring blocks.

mod average;
mod grid;
mod resample;

pub use grid::BlockGrid;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ConvertError;
use crate::bitmap::Bitmap;

/// How a block of source pixels is reduced to one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionStrategy {
    /// Arithmetic mean of every pixel in the block, truncated per channel.
    #[default]
    Average,
    /// Lanczos3 downscale of the whole cropped image, one pixel per block.
    Resample,
}

impl ReductionStrategy {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ReductionStrategy::Average => "average",
            ReductionStrategy::Resample => "resample",
        }
    }
}

impl fmt::Display for ReductionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reduction strategy '{0}' (expected 'average' or 'resample')")]
pub struct ParseStrategyError(String);

impl FromStr for ReductionStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("average") {
            Ok(ReductionStrategy::Average)
        } else if name.eq_ignore_ascii_case("resample") {
            Ok(ReductionStrategy::Resample)
        } else {
            Err(ParseStrategyError(name.to_string()))
        }
    }
}

/// Reduce `image` to a grid of representative block colors.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidPixelSize`] if `pixel_size` is zero, and
/// [`ConvertError::Resample`] if the resample strategy cannot build its
/// working image.
///
/// # Example
///
/// ```
/// use nord_pixel::{reduce, ReductionStrategy, Rgb, RgbBuffer};
///
/// let image = RgbBuffer::new(20, 9, Rgb::new(10, 20, 30));
/// let grid = reduce(&image, 8, ReductionStrategy::Average).unwrap();
///
/// assert_eq!((grid.blocks_x(), grid.blocks_y()), (2, 1));
/// assert_eq!(grid.get(1, 0), Some(Rgb::new(10, 20, 30)));
/// ```
pub fn reduce<B: Bitmap + ?Sized>(
    image: &B,
    pixel_size: u32,
    strategy: ReductionStrategy,
) -> Result<BlockGrid, ConvertError> {
    if pixel_size == 0 {
        return Err(ConvertError::InvalidPixelSize(pixel_size));
    }

    let blocks_x = image.width() / pixel_size;
    let blocks_y = image.height() / pixel_size;

    if blocks_x == 0 || blocks_y == 0 {
        tracing::warn!(
            width = image.width(),
            height = image.height(),
            pixel_size,
            "Image is smaller than one block, producing an empty grid"
        );
        return Ok(BlockGrid::empty(blocks_x, blocks_y));
    }

    tracing::debug!(blocks_x, blocks_y, pixel_size, %strategy, "Reducing image to block grid");

    match strategy {
        ReductionStrategy::Average => Ok(average::reduce_average(
            image, pixel_size, blocks_x, blocks_y,
        )),
        ReductionStrategy::Resample => {
            resample::reduce_resample(image, pixel_size, blocks_x, blocks_y)
        }
    }
}
