//! Assertion helpers for tests.

use std::path::Path;

use nord_pixel::{Bitmap, Rgb, NORD_COLORS};
use pretty_assertions::assert_eq;

use super::app::RunOutput;

/// Assert the binary exited with `expected`
pub fn assert_exit(output: &RunOutput, expected: i32) {
    assert_eq!(
        output.status,
        Some(expected),
        "Expected exit {}, got {:?}. stdout: {} stderr: {}",
        expected,
        output.status,
        output.stdout,
        output.stderr
    );
}

/// Assert the binary succeeded
pub fn assert_ok(output: &RunOutput) {
    assert_exit(output, 0);
}

/// Load an output image, asserting it exists and decodes
pub fn load_output(path: &Path) -> image::RgbImage {
    assert!(path.exists(), "Expected output at {}", path.display());
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .to_rgb8()
}

/// Assert every pixel of `image` is a Nord palette color
pub fn assert_palette_only(image: &image::RgbImage) {
    for (x, y, pixel) in image.enumerate_pixels() {
        let color = Rgb::from(*pixel);
        assert!(
            NORD_COLORS.contains(&color),
            "Pixel ({x}, {y}) is {color}, not a Nord color"
        );
    }
}

/// Assert every pixel of `image` equals `color`
pub fn assert_solid(image: &image::RgbImage, color: Rgb) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            assert_eq!(image.get(x, y), Some(color), "pixel ({x}, {y})");
        }
    }
}
