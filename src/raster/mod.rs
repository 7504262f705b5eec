//! Raster sources: decoded image bands, sampling windows and resampling.

mod band;
mod normalize;
mod resample;
mod source;

pub use band::{Band, Samples};
pub use normalize::normalize;
pub use resample::Resampling;
pub use source::ImageSource;

use std::fmt;

use crate::error::{Result, TvError};
use crate::glyph::{BLOCK_HEIGHT, BLOCK_WIDTH};
use crate::render::PixelBuffer;

/// Anything that can produce RGB pixels for a window of a larger raster.
pub trait PixelSource {
    /// Full raster size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Sample `window` into a `target_width` x `target_height` buffer.
    ///
    /// Fails with a geometry error if the window does not fit the raster.
    fn read(
        &self,
        window: Window,
        target_width: u32,
        target_height: u32,
        resampling: Resampling,
    ) -> Result<PixelBuffer>;
}

/// A rectangular sub-window of a raster, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Window {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The window covering a whole raster of `(width, height)`.
    pub fn full((width, height): (u32, u32)) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Check the window is non-empty and lies inside a raster of `(width, height)`.
    pub fn check_within(&self, (width, height): (u32, u32)) -> Result<()> {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if self.width == 0 || self.height == 0 {
            return Err(TvError::geometry(format!("window {} is empty", self)));
        }
        if right > width as u64 || bottom > height as u64 {
            return Err(TvError::geometry(format!(
                "window {} exceeds {}x{} raster",
                self, width, height
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Pixel size of the buffer to sample `window` into for `columns` glyphs.
///
/// Width is four pixels per column. Height keeps the window's aspect ratio,
/// rounded half-to-even to whole 8-pixel block rows, with at least one row.
pub fn output_size(window: &Window, columns: u32) -> Result<(u32, u32)> {
    if columns == 0 {
        return Err(TvError::geometry("output width must be at least one column"));
    }
    if window.width == 0 || window.height == 0 {
        return Err(TvError::geometry(format!("window {} is empty", window)));
    }
    let width = columns * BLOCK_WIDTH as u32;
    let aspect = window.height as f64 / window.width as f64;
    let rows = (aspect * width as f64 / BLOCK_HEIGHT as f64).round_ties_even();
    let rows = (rows as u32).max(1);
    Ok((width, rows * BLOCK_HEIGHT as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_display() {
        assert_eq!(Window::new(1, 2, 30, 40).to_string(), "30x40+1+2");
    }

    #[test]
    fn test_window_within_bounds() {
        assert!(Window::new(0, 0, 10, 10).check_within((10, 10)).is_ok());
        assert!(Window::new(5, 5, 5, 5).check_within((10, 10)).is_ok());
    }

    #[test]
    fn test_window_out_of_bounds() {
        let err = Window::new(6, 0, 5, 5).check_within((10, 10)).unwrap_err();
        assert!(matches!(err, TvError::Geometry(_)));
        assert!(Window::new(0, 0, 0, 5).check_within((10, 10)).is_err());
        assert!(Window::new(u32::MAX, 0, 2, 2).check_within((10, 10)).is_err());
    }

    #[test]
    fn test_output_size_square() {
        // 8 columns of 4 pixels = 32 wide, square window -> 32 tall.
        assert_eq!(output_size(&Window::full((32, 32)), 8).unwrap(), (32, 32));
    }

    #[test]
    fn test_output_size_rounds_to_block_rows() {
        // 80 columns -> 320 px wide; 640x480 -> 240 px -> 30 rows.
        assert_eq!(output_size(&Window::full((640, 480)), 80).unwrap(), (320, 240));
        // 100x10 at 10 columns: 40 * 0.1 / 8 = 0.5 -> ties to even -> 0 -> clamped to 1.
        assert_eq!(output_size(&Window::full((100, 10)), 10).unwrap(), (40, 8));
        // 20x30 at 10 columns: 40 * 1.5 / 8 = 7.5 -> 8 rows.
        assert_eq!(output_size(&Window::full((20, 30)), 10).unwrap(), (40, 64));
    }

    #[test]
    fn test_output_size_rejects_zero_columns() {
        assert!(matches!(
            output_size(&Window::full((10, 10)), 0),
            Err(TvError::Geometry(_))
        ));
    }
}
