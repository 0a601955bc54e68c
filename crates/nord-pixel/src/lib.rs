#![allow(clippy::module_inception)]

//! nord-pixel: block-quantized pixel art in the Nord palette
//!
//! This library turns an RGB bitmap into "pixel art": the image is cut into
//! square blocks, each block is reduced to one color, that color is snapped
//! to the nearest entry of a small fixed palette, and the blocks are painted
//! back out, optionally with a background-colored gap between them.
//!
//! # Quick Start
//!
//! The [`NordConverter`] builder is the primary entry point:
//!
//! ```
//! use nord_pixel::{Bitmap, NordConverter, Rgb, RgbBuffer};
//!
//! let source = RgbBuffer::new(16, 16, Rgb::new(255, 255, 255));
//! let result = NordConverter::nord().pixel_size(8).convert(&source).unwrap();
//!
//! assert_eq!(result.image.width(), 16);
//! assert_eq!(result.image.get(0, 0), Some(Rgb::new(129, 161, 193)));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source bitmap            (any Bitmap: RgbBuffer, image::RgbImage)
//!     |
//!     v
//! reduce                   (Average: truncated box mean,
//!     |                     Resample: Lanczos3 downscale)
//!     v
//! BlockGrid                blocks_x = width / pixel_size
//!     |                    blocks_y = height / pixel_size
//!     v
//! quantize                 (nearest palette color, squared RGB distance,
//!     |                     first entry wins ties)
//!     v
//! reconstruct              (gap == 0: full squares
//!     |                     gap  > 0: inset squares on darkest-color canvas)
//!     v
//! RgbBuffer                blocks_x * pixel_size x blocks_y * pixel_size
//! ```
//!
//! Pixels beyond the last whole block on the right and bottom edges are
//! dropped, so the output can be slightly smaller than the input.
//!
//! # Color Distance
//!
//! Matching uses plain squared Euclidean distance on the 8-bit channels.
//! There is no gamma decoding and no perceptual color space; with a
//! six-entry palette of dark blues the simple metric is what the output is
//! defined by.
//!
//! # Averaging
//!
//! The average strategy truncates the per-channel mean toward zero instead
//! of rounding. A block whose mean red is 12.9 yields 12.

pub mod api;
pub mod bitmap;
pub mod color;
pub mod output;
pub mod palette;
pub mod reduce;


pub use api::{
    convert, Conversion, ConversionReport, ConvertError, ConvertOptions, NordConverter,
    DEFAULT_GAP, DEFAULT_PIXEL_SIZE,
};
pub use bitmap::{Bitmap, BitmapMut, RgbBuffer};
pub use color::Rgb;
pub use output::reconstruct;
pub use palette::{nearest, Palette, PaletteError, NORD_COLORS};
pub use reduce::{reduce, BlockGrid, ParseStrategyError, ReductionStrategy};
