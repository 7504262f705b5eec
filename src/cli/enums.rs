//! CLI enum types for resampling, color and output options.

use clap::ValueEnum;

use crate::raster::Resampling;
use crate::render::{ColorMode, OutputMode};

/// Resampling kernel for reading the image window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Resample {
    Nearest,
    Bilinear,
    Cubic,
    Cubicspline,
    Lanczos,
    #[default]
    Average,
    Mode,
}

impl From<Resample> for Resampling {
    fn from(r: Resample) -> Self {
        match r {
            Resample::Nearest => Resampling::Nearest,
            Resample::Bilinear => Resampling::Bilinear,
            Resample::Cubic => Resampling::Cubic,
            Resample::Cubicspline => Resampling::CubicSpline,
            Resample::Lanczos => Resampling::Lanczos,
            Resample::Average => Resampling::Average,
            Resample::Mode => Resampling::Mode,
        }
    }
}

/// Terminal color depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Color {
    #[default]
    Truecolor,
    #[value(name = "256")]
    Palette256,
}

impl From<Color> for ColorMode {
    fn from(c: Color) -> Self {
        match c {
            Color::Truecolor => ColorMode::TrueColor,
            Color::Palette256 => ColorMode::Palette256,
        }
    }
}

/// Output buffering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Output {
    /// Flush every row (safe when redirected)
    Line,
    /// One write for the whole image (fastest)
    #[default]
    Raw,
}

impl From<Output> for OutputMode {
    fn from(o: Output) -> Self {
        match o {
            Output::Line => OutputMode::Line,
            Output::Raw => OutputMode::Raw,
        }
    }
}
