//! Lanczos3 reduction.
//!
//! The cropped source (`blocks_x * pixel_size` by `blocks_y * pixel_size`)
//! is downscaled straight to `blocks_x x blocks_y` with
//! [`image::imageops::resize`] and each output pixel becomes one block.
//! Lanczos3 has a wider support than a box filter, so colors from adjacent
//! blocks contribute slightly and edges ring a little.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::grid::BlockGrid;
use crate::api::ConvertError;
use crate::bitmap::Bitmap;
use crate::color::Rgb;

/// Downscale the cropped `image` to the block grid with Lanczos3.
pub(super) fn reduce_resample<B: Bitmap + ?Sized>(
    image: &B,
    pixel_size: u32,
    blocks_x: u32,
    blocks_y: u32,
) -> Result<BlockGrid, ConvertError> {
    let crop = crop_to_blocks(image, blocks_x * pixel_size, blocks_y * pixel_size)?;
    let small = resize_lanczos(&crop, blocks_x, blocks_y);

    let colors = small.pixels().map(|&p| Rgb::from(p)).collect();
    Ok(BlockGrid::from_parts(colors, blocks_x, blocks_y))
}

/// Copy the top-left `width x height` region into an owned `RgbImage`.
fn crop_to_blocks<B: Bitmap + ?Sized>(
    image: &B,
    width: u32,
    height: u32,
) -> Result<RgbImage, ConvertError> {
    let mut raw = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let pixel = image.get(x, y).unwrap_or_default();
            raw.extend_from_slice(&pixel.to_bytes());
        }
    }
    RgbImage::from_raw(width, height, raw).ok_or_else(|| {
        ConvertError::Resample(format!(
            "pixel buffer does not match {}x{} crop",
            width, height
        ))
    })
}

/// Lanczos3 resize, returning the input unchanged when dimensions match.
fn resize_lanczos(pixels: &RgbImage, new_width: u32, new_height: u32) -> RgbImage {
    if pixels.dimensions() == (new_width, new_height) {
        return pixels.clone();
    }
    imageops::resize(pixels, new_width, new_height, FilterType::Lanczos3)
}
