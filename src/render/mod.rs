//! Frame rendering: pixel buffers in, terminal byte streams out.
//!
//! The pipeline for one image is:
//!
//! 1. **Geometry** - size the sampling window to whole 8x4 blocks
//! 2. **Read** - ask the [`PixelSource`] for a resampled, normalized buffer
//! 3. **Match** - approximate every block by a glyph and two colors
//! 4. **Emit** - write color sequences only when they change within a row

mod buffer;
mod color;
mod frame;

pub use buffer::PixelBuffer;
pub use color::{cube_index, palette_index, ColorMode, CUBE_LEVELS, RESET};
pub use frame::FrameRenderer;

use std::io::Write;

use crate::error::Result;
use crate::glyph::CATALOG_LEN;
use crate::raster::{output_size, PixelSource, Resampling, Window};

/// How rendered rows reach the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write and flush every row as soon as it is complete.
    Line,
    /// Assemble the whole frame and write it in one go.
    #[default]
    Raw,
}

impl OutputMode {
    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Line => "line",
            OutputMode::Raw => "raw",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "line" => Some(OutputMode::Line),
            "raw" => Some(OutputMode::Raw),
            _ => None,
        }
    }
}

/// Everything that varies between render sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of leading catalog entries to match against.
    pub glyphs: usize,
    pub color: ColorMode,
    pub resample: Resampling,
    pub output: OutputMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glyphs: CATALOG_LEN,
            color: ColorMode::default(),
            resample: Resampling::default(),
            output: OutputMode::default(),
        }
    }
}

/// Render `source` at `columns` glyphs wide into `sink`.
///
/// The whole buffer is read before anything is written, so geometry and
/// decode failures never leave partial output behind.
pub fn show<S, W>(
    source: &S,
    window: Option<Window>,
    columns: u32,
    resample: Resampling,
    renderer: &FrameRenderer,
    sink: &mut W,
) -> Result<()>
where
    S: PixelSource + ?Sized,
    W: Write,
{
    let window = window.unwrap_or_else(|| Window::full(source.size()));
    window.check_within(source.size())?;
    let (width, height) = output_size(&window, columns)?;
    log::debug!(
        "sampling {} to {}x{} pixels with {} resampling",
        window,
        width,
        height,
        resample.name()
    );

    let buffer = source.read(window, width, height, resample)?;
    renderer.render_to(&buffer, sink)
}
