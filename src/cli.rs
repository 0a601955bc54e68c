//! Command-line arguments and the conversion they drive.

use std::path::PathBuf;

use clap::Parser;
use nord_pixel::{ConversionReport, ConvertOptions, NordConverter, ReductionStrategy};

use crate::codec;
use crate::config::ConvertConfig;
use crate::error::AppError;
use crate::report::ReportFormat;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV: &str = "NORDOT_CONFIG";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nordot")]
#[command(about = "Convert an image to pixel art in the Nord blue/black palette")]
pub struct Cli {
    /// Input image (PNG, JPEG, GIF, BMP, TIFF or WebP)
    pub input: Option<PathBuf>,

    /// Output image path [default: nord_pixel_art.png]
    pub output: Option<PathBuf>,

    /// Block edge length in pixels [default: 8]
    pub pixel_size: Option<u32>,

    /// Border between blocks in pixels [default: 0]
    pub gap: Option<u32>,

    /// Block color strategy: "average" or "resample"
    #[arg(long)]
    pub strategy: Option<ReductionStrategy>,

    /// YAML config file (falls back to $NORDOT_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Summary format printed after conversion
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
}

impl Cli {
    /// Config file path from `--config`, else from `$NORDOT_CONFIG`.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    /// Load the config file, if one was named.
    pub fn load_config(&self) -> Result<ConvertConfig, AppError> {
        match self.config_path() {
            Some(path) => ConvertConfig::load(&path),
            None => Ok(ConvertConfig::default()),
        }
    }

    /// Merge arguments over `config`. Returns `None` without an input path.
    pub fn resolve(&self, config: &ConvertConfig) -> Option<Settings> {
        let input = self.input.clone()?;
        Some(Settings {
            input,
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.output_or_default()),
            options: ConvertOptions {
                pixel_size: self
                    .pixel_size
                    .unwrap_or_else(|| config.pixel_size_or_default()),
                gap: self.gap.unwrap_or_else(|| config.gap_or_default()),
                strategy: self
                    .strategy
                    .unwrap_or_else(|| config.strategy_or_default()),
            },
        })
    }
}

/// Decode the input, convert it and write the output.
///
/// The output file is only created once conversion has succeeded.
pub fn run(settings: &Settings) -> Result<ConversionReport, AppError> {
    let source = codec::load_rgb(&settings.input)?;
    let conversion = NordConverter::nord()
        .options(settings.options)
        .convert(&source)?;

    tracing::debug!(
        cropped_fraction = conversion.report.cropped_fraction(),
        blocks_x = conversion.report.blocks_x,
        blocks_y = conversion.report.blocks_y,
        "Converted image"
    );

    codec::save_rgb(&settings.output, &conversion.image)?;
    Ok(conversion.report)
}
