//! Test fixtures and constants.

use nord_pixel::Rgb;

/// Nord palette entries referenced by tests
pub mod nord {
    use nord_pixel::Rgb;

    /// Darkest entry, also the gap background
    pub const NORD0: Rgb = Rgb::new(46, 52, 64);

    /// Nearest entry to pure red
    pub const NORD1: Rgb = Rgb::new(59, 66, 82);

    /// Lightest entry, nearest to white
    pub const FROST_LIGHT: Rgb = Rgb::new(129, 161, 193);
}

/// Solid-color image
pub fn solid(width: u32, height: u32, color: Rgb) -> image::RgbImage {
    image::RgbImage::from_pixel(width, height, image::Rgb(color.to_bytes()))
}

/// Left half black, right half white
pub fn split(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    })
}

/// Horizontal gradient across all channels
pub fn gradient(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 255) / width.max(1)) as u8;
        image::Rgb([v, (y % 256) as u8, 255 - v])
    })
}

/// Config file contents
pub const CONFIG_YAML: &str = "\
output: configured.png
pixel_size: 4
gap: 1
strategy: resample
";
