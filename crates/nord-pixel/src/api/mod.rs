//! Public API for the nord-pixel crate.
//!
//! This module provides the high-level API: the [`NordConverter`] builder,
//! the [`convert`] shorthand, the [`ConversionReport`] metadata and the
//! [`ConvertError`] unified error type.

mod builder;
mod error;
mod report;

pub use builder::{
    convert, Conversion, ConvertOptions, NordConverter, DEFAULT_GAP, DEFAULT_PIXEL_SIZE,
};
pub use error::ConvertError;
pub use report::ConversionReport;
