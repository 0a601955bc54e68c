//! NordConverter builder -- the primary entry point for the crate.
//!
//! [`NordConverter`] wraps reduce -> quantize -> reconstruct behind a fluent
//! builder with the classic defaults (8 pixel blocks, no gap, averaging).

use super::error::ConvertError;
use super::report::ConversionReport;
use crate::bitmap::{Bitmap, RgbBuffer};
use crate::output::reconstruct;
use crate::palette::Palette;
use crate::reduce::{reduce, ReductionStrategy};

/// Default block edge length in source pixels.
pub const DEFAULT_PIXEL_SIZE: u32 = 8;

/// Default border between blocks in output pixels.
pub const DEFAULT_GAP: u32 = 0;

/// Pipeline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Block edge length in source pixels, must be at least 1.
    pub pixel_size: u32,
    /// Border width in output pixels. Values `>= pixel_size` leave nothing
    /// but background.
    pub gap: u32,
    /// How each block's representative color is computed.
    pub strategy: ReductionStrategy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            gap: DEFAULT_GAP,
            strategy: ReductionStrategy::default(),
        }
    }
}

/// Output of one conversion: the rendered image and its metadata.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rendered pixel art, `blocks_x * pixel_size` by `blocks_y * pixel_size`.
    pub image: RgbBuffer,
    /// Sizes and parameters used.
    pub report: ConversionReport,
}

/// Pixel-art converter.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self` so one converter can process
///   any number of images
///
/// # Example
///
/// ```
/// use nord_pixel::{Bitmap, NordConverter, ReductionStrategy, Rgb, RgbBuffer};
///
/// let converter = NordConverter::nord()
///     .pixel_size(4)
///     .gap(1)
///     .strategy(ReductionStrategy::Average);
///
/// let source = RgbBuffer::new(10, 8, Rgb::new(255, 255, 255));
/// let result = converter.convert(&source).unwrap();
///
/// assert_eq!((result.image.width(), result.image.height()), (8, 8));
/// assert_eq!(result.report.original_width, 10);
/// ```
#[derive(Debug, Clone)]
pub struct NordConverter {
    palette: Palette,
    options: ConvertOptions,
}

impl NordConverter {
    /// Create a converter for the given palette with default options.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: ConvertOptions::default(),
        }
    }

    /// Create a converter for the Nord palette with default options.
    pub fn nord() -> Self {
        Self::new(Palette::nord())
    }

    /// Set the block edge length in source pixels.
    #[inline]
    pub fn pixel_size(mut self, pixel_size: u32) -> Self {
        self.options.pixel_size = pixel_size;
        self
    }

    /// Set the border width between blocks in output pixels.
    #[inline]
    pub fn gap(mut self, gap: u32) -> Self {
        self.options.gap = gap;
        self
    }

    /// Set the block reduction strategy.
    #[inline]
    pub fn strategy(mut self, strategy: ReductionStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// The palette blocks are snapped to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current options.
    #[inline]
    pub fn current_options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert `source` into palette-constrained pixel art.
    ///
    /// Applies the full pipeline:
    /// 1. Reduce to a block grid with the configured strategy
    /// 2. Snap every block to its nearest palette color
    /// 3. Reconstruct, using the palette's darkest color as background
    ///
    /// A source smaller than one block gives a zero-area image, not an error.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidPixelSize`] if the block size is zero.
    pub fn convert<B: Bitmap + ?Sized>(&self, source: &B) -> Result<Conversion, ConvertError> {
        let ConvertOptions {
            pixel_size,
            gap,
            strategy,
        } = self.options;

        if pixel_size == 0 {
            return Err(ConvertError::InvalidPixelSize(pixel_size));
        }

        // 1. Reduce
        let grid = reduce(source, pixel_size, strategy)?;

        // 2. Quantize
        let quantized = grid.quantize(&self.palette);

        // 3. Reconstruct
        let background = self.palette.darkest();
        let image = reconstruct(&quantized, pixel_size, gap, background)?;

        let report = ConversionReport {
            original_width: source.width(),
            original_height: source.height(),
            output_width: image.width(),
            output_height: image.height(),
            blocks_x: quantized.blocks_x(),
            blocks_y: quantized.blocks_y(),
            pixel_size,
            gap,
            strategy,
        };

        tracing::debug!(
            original_width = report.original_width,
            original_height = report.original_height,
            output_width = report.output_width,
            output_height = report.output_height,
            blocks = quantized.colors().len(),
            %background,
            "Conversion finished"
        );

        Ok(Conversion { image, report })
    }
}

impl Default for NordConverter {
    fn default() -> Self {
        Self::nord()
    }
}

/// Convert `source` with the averaging strategy.
///
/// Shorthand for
/// `NordConverter::new(palette.clone()).pixel_size(pixel_size).gap(gap).convert(source)`.
///
/// # Example
///
/// ```
/// use nord_pixel::{convert, Palette, Rgb, RgbBuffer};
///
/// let source = RgbBuffer::new(16, 16, Rgb::new(0, 0, 0));
/// let result = convert(&source, 8, 0, &Palette::nord()).unwrap();
/// assert!(result.image.pixels().iter().all(|&p| p == Rgb::new(46, 52, 64)));
/// ```
pub fn convert<B: Bitmap + ?Sized>(
    source: &B,
    pixel_size: u32,
    gap: u32,
    palette: &Palette,
) -> Result<Conversion, ConvertError> {
    NordConverter::new(palette.clone())
        .pixel_size(pixel_size)
        .gap(gap)
        .convert(source)
}
