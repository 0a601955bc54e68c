//! Box-filter reduction.
//!
//! Each block's color is the per-channel mean of its `pixel_size^2` pixels.
//! The sum is divided with integer division, which is the floating-point mean
//! truncated toward zero. A block with mean 12.9 therefore yields 12, not 13.

use super::grid::BlockGrid;
use crate::bitmap::Bitmap;
use crate::color::Rgb;

/// Average every whole block of `image`, row-major.
///
/// The caller guarantees `pixel_size > 0` and that the grid dimensions were
/// derived from the image size by floor division.
pub(super) fn reduce_average<B: Bitmap + ?Sized>(
    image: &B,
    pixel_size: u32,
    blocks_x: u32,
    blocks_y: u32,
) -> BlockGrid {
    let mut colors = Vec::with_capacity(blocks_x as usize * blocks_y as usize);

    for row in 0..blocks_y {
        for col in 0..blocks_x {
            colors.push(block_mean(image, col * pixel_size, row * pixel_size, pixel_size));
        }
    }

    BlockGrid::from_parts(colors, blocks_x, blocks_y)
}

/// Truncated mean of the `size x size` square at `(left, top)`.
fn block_mean<B: Bitmap + ?Sized>(image: &B, left: u32, top: u32, size: u32) -> Rgb {
    // u64 so very large blocks cannot overflow the channel sums
    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for y in top..top + size {
        for x in left..left + size {
            if let Some(pixel) = image.get(x, y) {
                sum[0] += pixel.r as u64;
                sum[1] += pixel.g as u64;
                sum[2] += pixel.b as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Rgb::default();
    }

    Rgb::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    )
}
