//! Color type shared by every stage of the pipeline.
//!
//! # Example
//!
//! ```
//! use nord_pixel::Rgb;
//!
//! let pixel = Rgb::new(128, 64, 32);
//! assert_eq!(pixel.to_bytes(), [128, 64, 32]);
//! assert_eq!(pixel.to_string(), "#804020");
//! ```

mod rgb;

pub use rgb::Rgb;
