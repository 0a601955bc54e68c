//! User-facing conversion summary.

use std::path::Path;

use nord_pixel::ConversionReport;
use serde::Serialize;

use crate::error::AppError;

/// How the summary is printed after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// YAML document
    Yaml,
    /// JSON object
    Json,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    output: &'a Path,
    #[serde(flatten)]
    report: &'a ConversionReport,
}

/// Render the summary for `report`, which was written to `output`.
pub fn render(
    format: ReportFormat,
    output: &Path,
    report: &ConversionReport,
) -> Result<String, AppError> {
    let document = ReportDocument { output, report };
    match format {
        ReportFormat::Text => Ok(render_text(output, report)),
        ReportFormat::Yaml => {
            serde_yaml::to_string(&document).map_err(|e| AppError::Report(e.to_string()))
        }
        ReportFormat::Json => serde_json::to_string_pretty(&document)
            .map(|json| json + "\n")
            .map_err(|e| AppError::Report(e.to_string())),
    }
}

/// The plain-text summary. The gap line only appears when a gap was drawn.
pub fn render_text(output: &Path, report: &ConversionReport) -> String {
    let mut text = format!(
        "Conversion complete: {}\n\
         Original size: {}x{}\n\
         Output size: {}x{}\n\
         Pixel block size: {}x{}\n",
        output.display(),
        report.original_width,
        report.original_height,
        report.output_width,
        report.output_height,
        report.pixel_size,
        report.pixel_size,
    );
    if report.gap > 0 {
        text.push_str(&format!("Gap between blocks: {}px\n", report.gap));
    }
    text
}
