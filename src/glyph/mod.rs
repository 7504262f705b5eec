//! Glyph approximation of 8x4 pixel blocks.
//!
//! A block is split into foreground and background cells along its most
//! varied color channel, and the resulting 32-bit pattern is matched against
//! the fixed [`CATALOG`]:
//!
//! 1. **Dominant channel** - channel with the widest value spread
//! 2. **Split** - cells above the channel's midpoint are foreground
//! 3. **Colors** - per-channel median of each side
//! 4. **Catalog match** - smallest Hamming distance, trying the inverted
//!    pattern too, with a shade-glyph fallback for poor matches

mod catalog;
mod matcher;

pub use catalog::{catalog_prefix, hamming, Glyph, CATALOG, CATALOG_LEN, SHADES};
pub use matcher::{match_block, GlyphChoice, MatchResult, FALLBACK_THRESHOLD};

/// Block height in pixels.
pub const BLOCK_HEIGHT: usize = 8;
/// Block width in pixels.
pub const BLOCK_WIDTH: usize = 4;
/// Cells per block, one mask bit each.
pub const BLOCK_CELLS: usize = BLOCK_HEIGHT * BLOCK_WIDTH;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel value by index (0 = red, 1 = green, 2 = blue).
    pub fn channel(&self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

/// One 8x4 tile of pixels in raster order (row-major, top to bottom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    cells: [Rgb; BLOCK_CELLS],
}

impl Block {
    /// Build a block by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        Self {
            cells: std::array::from_fn(|i| f(i / BLOCK_WIDTH, i % BLOCK_WIDTH)),
        }
    }

    pub fn cells(&self) -> &[Rgb; BLOCK_CELLS] {
        &self.cells
    }
}
