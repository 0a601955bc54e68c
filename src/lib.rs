//! Nordot - Nord palette pixel art
//!
//! Command-line front end for the `nord-pixel` library.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod report;
