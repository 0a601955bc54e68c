//! Palette types and nearest-color matching
//!
//! This module provides the fixed Nord color table, the [`Palette`] type and
//! the [`nearest`] lookup used to snap block colors onto it.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest, Palette, NORD_COLORS};
