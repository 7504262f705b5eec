//! The fixed glyph catalog.
//!
//! Every entry pairs a display character with a 32-bit ink mask describing
//! which cells of an 8x4 block the glyph covers. Bit 31 is the top-left cell,
//! bit 0 the bottom-right one, so each `_`-separated nibble in the literals
//! below is one block row read left to right.

#[cfg(test)]
use super::{BLOCK_CELLS, BLOCK_WIDTH};

/// A catalog entry: a character and the block cells its ink covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub mask: u32,
}

impl Glyph {
    pub const fn new(ch: char, mask: u32) -> Self {
        Self { ch, mask }
    }
}

#[cfg(test)]
impl Glyph {
    /// Number of inked cells.
    pub fn coverage(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Whether the cell at `(row, col)` of the block is inked.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let bit = BLOCK_CELLS - 1 - (row * BLOCK_WIDTH + col);
        self.mask & (1 << bit) != 0
    }
}

/// Shade glyphs used when no catalog entry fits, from empty to full density.
pub const SHADES: [char; 5] = [' ', '\u{2591}', '\u{2592}', '\u{2593}', '\u{2588}'];

/// The full catalog, in matching priority order. Entry 0 is always blank.
pub static CATALOG: [Glyph; 57] = [
    Glyph::new(' ', 0b0000_0000_0000_0000_0000_0000_0000_0000),
    Glyph::new('▄', 0b0000_0000_0000_0000_1111_1111_1111_1111),
    Glyph::new('▁', 0b0000_0000_0000_0000_0000_0000_0000_1111),
    Glyph::new('▂', 0b0000_0000_0000_0000_0000_0000_1111_1111),
    Glyph::new('▃', 0b0000_0000_0000_0000_0000_1111_1111_1111),
    Glyph::new('▅', 0b0000_0000_0000_1111_1111_1111_1111_1111),
    Glyph::new('▆', 0b0000_0000_1111_1111_1111_1111_1111_1111),
    Glyph::new('▇', 0b0000_1111_1111_1111_1111_1111_1111_1111),
    Glyph::new('▊', 0b1110_1110_1110_1110_1110_1110_1110_1110),
    Glyph::new('▌', 0b1100_1100_1100_1100_1100_1100_1100_1100),
    Glyph::new('▎', 0b1000_1000_1000_1000_1000_1000_1000_1000),
    Glyph::new('▖', 0b0000_0000_0000_0000_1100_1100_1100_1100),
    Glyph::new('▗', 0b0000_0000_0000_0000_0011_0011_0011_0011),
    Glyph::new('▘', 0b1100_1100_1100_1100_0000_0000_0000_0000),
    Glyph::new('▚', 0b1100_1100_1100_1100_0011_0011_0011_0011),
    Glyph::new('▝', 0b0011_0011_0011_0011_0000_0000_0000_0000),
    Glyph::new('━', 0b0000_0000_0000_1111_1111_0000_0000_0000),
    Glyph::new('┃', 0b0110_0110_0110_0110_0110_0110_0110_0110),
    Glyph::new('┏', 0b0000_0000_0000_0111_0111_0110_0110_0110),
    Glyph::new('┓', 0b0000_0000_0000_1110_1110_0110_0110_0110),
    Glyph::new('┗', 0b0110_0110_0110_0111_0111_0000_0000_0000),
    Glyph::new('┛', 0b0110_0110_0110_1110_1110_0000_0000_0000),
    Glyph::new('┣', 0b0110_0110_0110_0111_0111_0110_0110_0110),
    Glyph::new('┫', 0b0110_0110_0110_1110_1110_0110_0110_0110),
    Glyph::new('┳', 0b0000_0000_0000_1111_1111_0110_0110_0110),
    Glyph::new('┻', 0b0110_0110_0110_1111_1111_0000_0000_0000),
    Glyph::new('╋', 0b0110_0110_0110_1111_1111_0110_0110_0110),
    Glyph::new('╸', 0b0000_0000_0000_1100_1100_0000_0000_0000),
    Glyph::new('╹', 0b0000_0000_0000_0110_0110_0000_0000_0000),
    Glyph::new('╺', 0b0000_0000_0000_0011_0011_0000_0000_0000),
    Glyph::new('╻', 0b0000_0000_0000_0110_0110_0000_0000_0000),
    Glyph::new('╏', 0b0000_0110_0110_0000_0000_0110_0110_0000),
    Glyph::new('─', 0b0000_0000_0000_1111_0000_0000_0000_0000),
    Glyph::new('─', 0b0000_0000_0000_0000_1111_0000_0000_0000),
    Glyph::new('│', 0b0100_0100_0100_0100_0100_0100_0100_0100),
    Glyph::new('│', 0b0010_0010_0010_0010_0010_0010_0010_0010),
    Glyph::new('╴', 0b0000_0000_0000_1110_0000_0000_0000_0000),
    Glyph::new('╴', 0b0000_0000_0000_0000_1110_0000_0000_0000),
    Glyph::new('╵', 0b0100_0100_0100_0100_0000_0000_0000_0000),
    Glyph::new('╵', 0b0010_0010_0010_0010_0000_0000_0000_0000),
    Glyph::new('╶', 0b0000_0000_0000_0011_0000_0000_0000_0000),
    Glyph::new('╶', 0b0000_0000_0000_0000_0011_0000_0000_0000),
    Glyph::new('╵', 0b0000_0000_0000_0000_0100_0100_0100_0100),
    Glyph::new('╵', 0b0000_0000_0000_0000_0010_0010_0010_0010),
    Glyph::new('⎢', 0b0100_0100_0100_0100_0100_0100_0100_0100),
    Glyph::new('⎥', 0b0010_0010_0010_0010_0010_0010_0010_0010),
    Glyph::new('⎺', 0b0000_1111_0000_0000_0000_0000_0000_0000),
    Glyph::new('⎻', 0b0000_0000_1111_0000_0000_0000_0000_0000),
    Glyph::new('⎼', 0b0000_0000_0000_0000_0000_1111_0000_0000),
    Glyph::new('⎽', 0b0000_0000_0000_0000_0000_0000_1111_0000),
    Glyph::new('▪', 0b0000_0000_0000_0110_0110_0000_0000_0000),
    Glyph::new('▙', 0b0000_1100_1100_1100_1111_1111_1111_1111),
    Glyph::new('▚', 0b0000_1100_1100_1100_0011_0011_0011_0011),
    Glyph::new('▛', 0b0000_1111_1111_1111_1100_1100_1100_1100),
    Glyph::new('▜', 0b0000_1111_1111_1111_0011_0011_0011_0011),
    Glyph::new('▞', 0b0000_0011_0011_0011_1100_1100_1100_1100),
    Glyph::new('▟', 0b0000_0011_0011_0011_1111_1111_1111_1111),
];

/// Number of entries in the full catalog.
pub const CATALOG_LEN: usize = CATALOG.len();

/// Return the first `count` catalog entries, clamped to `1..=CATALOG_LEN`.
pub fn catalog_prefix(count: usize) -> &'static [Glyph] {
    &CATALOG[..count.clamp(1, CATALOG_LEN)]
}

/// Number of differing bits between two masks.
pub fn hamming(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_is_blank() {
        assert_eq!(CATALOG[0].ch, ' ');
        assert_eq!(CATALOG[0].mask, 0);
    }

    #[test]
    fn test_lower_half_block_covers_bottom_rows() {
        let lower = CATALOG[1];
        assert_eq!(lower.ch, '\u{2584}');
        assert_eq!(lower.coverage(), 16);
        assert!(!lower.covers(0, 0));
        assert!(!lower.covers(3, 3));
        assert!(lower.covers(4, 0));
        assert!(lower.covers(7, 3));
    }

    #[test]
    fn test_left_half_block_covers_left_columns() {
        let left = CATALOG[9];
        assert_eq!(left.ch, '\u{258c}');
        for row in 0..8 {
            assert!(left.covers(row, 0));
            assert!(left.covers(row, 1));
            assert!(!left.covers(row, 2));
            assert!(!left.covers(row, 3));
        }
    }

    #[test]
    fn test_catalog_prefix_clamps() {
        assert_eq!(catalog_prefix(0).len(), 1);
        assert_eq!(catalog_prefix(10).len(), 10);
        assert_eq!(catalog_prefix(1000).len(), CATALOG_LEN);
        assert_eq!(CATALOG_LEN, 57);
    }

    #[test]
    fn test_hamming_identity_and_complement() {
        for glyph in CATALOG.iter() {
            assert_eq!(hamming(glyph.mask, glyph.mask), 0);
            assert_eq!(hamming(glyph.mask, !glyph.mask), 32);
        }
        assert_eq!(hamming(0b1010, 0b0101), 4);
    }

    #[test]
    fn test_shades_ascend_in_density() {
        assert_eq!(SHADES[0], ' ');
        assert_eq!(SHADES[4], '\u{2588}');
    }
}
