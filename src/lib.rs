//! textview library crate.
//!
//! Renders raster images as rows of colored unicode block glyphs. Each 8x4
//! pixel block becomes one character cell with a foreground and background
//! color chosen to approximate it.
//!
//! This module exposes the internal components for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod glyph;
pub mod inputs;
pub mod raster;
pub mod render;
pub mod settings;
pub mod terminal;
pub mod viewer;

pub use error::{Result, TvError};
