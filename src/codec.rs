//! Image file decoding and encoding.
//!
//! The conversion core never touches the filesystem; this module is the
//! boundary. Inputs are decoded with the `image` crate (any enabled format)
//! and flattened to 8-bit RGB. PNG outputs are encoded with the `png` crate;
//! any other extension is handed to `image`, which picks the encoder from the
//! extension.

use nord_pixel::{Bitmap, RgbBuffer};
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;

/// Decode an image file into 8-bit RGB, dropping any alpha channel.
pub fn load_rgb(path: &Path) -> Result<image::RgbImage, AppError> {
    let reader = image::ImageReader::open(path)?
        .with_guessed_format()
        .map_err(|e| AppError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let decoded = reader.decode().map_err(|e| AppError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded input image"
    );

    Ok(decoded.to_rgb8())
}

/// Write `buffer` to `path`, choosing the encoder from the file extension.
///
/// Nothing is written when encoding fails.
pub fn save_rgb(path: &Path, buffer: &RgbBuffer) -> Result<(), AppError> {
    if buffer.is_empty() {
        return Err(AppError::Encode {
            path: path.to_path_buf(),
            message: format!(
                "output image has no pixels ({}x{})",
                buffer.width(),
                buffer.height()
            ),
        });
    }

    if is_png_path(path) {
        let bytes = encode_png(buffer).map_err(|message| AppError::Encode {
            path: path.to_path_buf(),
            message,
        })?;
        std::fs::write(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
        return Ok(());
    }

    image::save_buffer(
        path,
        &buffer.to_rgb_bytes(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| AppError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "Wrote image");
    Ok(())
}

/// True for `.png` (any case) and for paths without an extension.
fn is_png_path(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("png"),
        None => true,
    }
}

/// Encode an RGB buffer as an 8-bit truecolor PNG.
pub fn encode_png(buffer: &RgbBuffer) -> Result<Vec<u8>, String> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder.write_header().map_err(|e| e.to_string())?;
        writer
            .write_image_data(&buffer.to_rgb_bytes())
            .map_err(|e| e.to_string())?;
    }
    Ok(buf.into_inner())
}
