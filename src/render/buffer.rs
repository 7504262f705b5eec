//! Dense 3-channel pixel buffers.

use crate::error::{Result, TvError};
use crate::glyph::{Block, Rgb, BLOCK_HEIGHT, BLOCK_WIDTH};

/// Interleaved RGB samples indexed `[row][col][channel]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap interleaved RGB data. The length must be `width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(TvError::geometry(format!(
                "pixel buffer of {} bytes does not match {}x{}x3",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Interleave three equally sized channel planes.
    pub fn from_planes(width: usize, height: usize, planes: [&[u8]; 3]) -> Result<Self> {
        let len = width * height;
        if planes.iter().any(|p| p.len() != len) {
            return Err(TvError::geometry(format!(
                "channel planes do not all hold {}x{} samples",
                width, height
            )));
        }
        let mut data = Vec::with_capacity(len * 3);
        for i in 0..len {
            data.extend([planes[0][i], planes[1][i], planes[2][i]]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let data = [color.r, color.g, color.b].repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, row: usize, col: usize) -> Rgb {
        let i = (row * self.width + col) * 3;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Rgb) {
        let i = (row * self.width + col) * 3;
        self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Number of block rows and block columns the buffer divides into.
    pub fn block_grid(&self) -> (usize, usize) {
        (self.height / BLOCK_HEIGHT, self.width / BLOCK_WIDTH)
    }

    /// Check that the buffer is non-empty and tiles exactly into blocks.
    pub fn check_tiling(&self) -> Result<()> {
        if self.width == 0
            || self.height == 0
            || self.width % BLOCK_WIDTH != 0
            || self.height % BLOCK_HEIGHT != 0
        {
            return Err(TvError::geometry(format!(
                "{}x{} buffer does not tile into {}x{} blocks",
                self.width, self.height, BLOCK_WIDTH, BLOCK_HEIGHT
            )));
        }
        Ok(())
    }

    /// The block at block coordinates `(block_row, block_col)`.
    pub fn block(&self, block_row: usize, block_col: usize) -> Block {
        let top = block_row * BLOCK_HEIGHT;
        let left = block_col * BLOCK_WIDTH;
        Block::from_fn(|row, col| self.pixel(top + row, left + col))
    }
}
