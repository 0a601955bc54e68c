//! Output stage of the pipeline.
//!
//! [`reconstruct`] turns a quantized [`BlockGrid`](crate::reduce::BlockGrid)
//! back into a full-size [`RgbBuffer`](crate::bitmap::RgbBuffer). The canvas
//! size depends only on the grid and the block size; `gap` only controls how
//! much of each cell is painted.

mod reconstruct;

pub use reconstruct::reconstruct;
