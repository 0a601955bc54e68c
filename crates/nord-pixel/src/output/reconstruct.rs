//! Block grid to output bitmap.

use crate::api::ConvertError;
use crate::bitmap::{BitmapMut, RgbBuffer};
use crate::color::Rgb;
use crate::reduce::BlockGrid;

/// Paint `grid` onto a new `blocks_x * pixel_size` by `blocks_y * pixel_size`
/// canvas.
///
/// - `gap == 0`: every block fills its whole `pixel_size` square, which is a
///   nearest-neighbour upscale of the grid.
/// - `gap > 0`: the canvas starts as `background` and each block paints a
///   `pixel_size - gap` square at its cell's top-left corner, leaving a
///   `gap`-wide border on the right and bottom of every cell.
///
/// When `gap >= pixel_size` no block is visible; the canvas stays pure
/// background and a warning is logged.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidPixelSize`] if `pixel_size` is zero, and
/// [`ConvertError::CanvasTooLarge`] if the canvas edge overflows `u32`.
///
/// # Example
///
/// ```
/// use nord_pixel::{reconstruct, Bitmap, BlockGrid, Rgb};
///
/// let block = Rgb::new(94, 129, 172);
/// let background = Rgb::new(46, 52, 64);
/// let grid = BlockGrid::new(vec![block], 1, 1).unwrap();
///
/// let out = reconstruct(&grid, 4, 1, background).unwrap();
/// assert_eq!((out.width(), out.height()), (4, 4));
/// assert_eq!(out.get(2, 2), Some(block));
/// assert_eq!(out.get(3, 0), Some(background));
/// ```
pub fn reconstruct(
    grid: &BlockGrid,
    pixel_size: u32,
    gap: u32,
    background: Rgb,
) -> Result<RgbBuffer, ConvertError> {
    if pixel_size == 0 {
        return Err(ConvertError::InvalidPixelSize(pixel_size));
    }

    let too_large = || ConvertError::CanvasTooLarge {
        blocks_x: grid.blocks_x(),
        blocks_y: grid.blocks_y(),
        pixel_size,
    };
    let width = grid.blocks_x().checked_mul(pixel_size).ok_or_else(too_large)?;
    let height = grid.blocks_y().checked_mul(pixel_size).ok_or_else(too_large)?;
    let mut canvas = RgbBuffer::new(width, height, background);

    let inset = pixel_size.saturating_sub(gap);
    if inset == 0 {
        tracing::warn!(
            pixel_size,
            gap,
            "Gap is not smaller than the block size, output is background only"
        );
        return Ok(canvas);
    }

    for (col, row, color) in grid.iter() {
        canvas.fill_square(col * pixel_size, row * pixel_size, inset, color);
    }
    Ok(canvas)
}
