//! Block-to-glyph matching.

use super::catalog::{hamming, Glyph, SHADES};
use super::{Block, Rgb, BLOCK_CELLS};

/// Catalog matches that disagree on more than this many cells fall back to
/// a shade glyph.
pub const FALLBACK_THRESHOLD: u32 = 16;

/// How the glyph of a [`MatchResult`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphChoice {
    /// A catalog entry, possibly matched against the inverted pattern.
    Catalog {
        index: usize,
        distance: u32,
        inverted: bool,
    },
    /// A shade glyph picked by foreground density.
    Shade { level: usize },
}

/// Glyph and colors chosen for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub foreground: Rgb,
    pub background: Rgb,
    pub glyph: char,
    pub choice: GlyphChoice,
}

/// Pick the glyph and colors that best approximate `block`.
///
/// `catalog` must be non-empty; callers pass a prefix of [`super::CATALOG`].
pub fn match_block(block: &Block, catalog: &[Glyph]) -> MatchResult {
    let cells = block.cells();
    let channel = dominant_channel(cells);

    let (lo, hi) = channel_range(cells, channel);
    let split = lo + (hi - lo) / 2;

    let mut mask = 0u32;
    for (i, cell) in cells.iter().enumerate() {
        if cell.channel(channel) > split {
            mask |= 1 << (BLOCK_CELLS - 1 - i);
        }
    }

    let fg = median_color(cells, mask, true);
    let bg = median_color(cells, mask, false);

    let (index, distance) = closest(catalog, mask);
    let (inv_index, inv_distance) = closest(catalog, !mask);

    let (index, distance, inverted) = if inv_distance < distance {
        (inv_index, inv_distance, true)
    } else {
        (index, distance, false)
    };

    if distance > FALLBACK_THRESHOLD {
        let level = (mask.count_ones() as usize * SHADES.len() / BLOCK_CELLS).min(SHADES.len() - 1);
        return MatchResult {
            foreground: fg,
            background: bg,
            glyph: SHADES[level],
            choice: GlyphChoice::Shade { level },
        };
    }

    let (foreground, background) = if inverted { (bg, fg) } else { (fg, bg) };
    MatchResult {
        foreground,
        background,
        glyph: catalog[index].ch,
        choice: GlyphChoice::Catalog {
            index,
            distance,
            inverted,
        },
    }
}

/// Channel with the widest min..max spread; the first one wins ties.
fn dominant_channel(cells: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_spread = 0;
    for channel in 0..3 {
        let (lo, hi) = channel_range(cells, channel);
        if hi - lo > best_spread {
            best = channel;
            best_spread = hi - lo;
        }
    }
    best
}

fn channel_range(cells: &[Rgb], channel: usize) -> (u8, u8) {
    cells.iter().fold((u8::MAX, u8::MIN), |(lo, hi), c| {
        let v = c.channel(channel);
        (lo.min(v), hi.max(v))
    })
}

/// Per-channel median over the cells on one side of `mask`.
///
/// Even-sized sides take the floor of the two middle values' mean. An empty
/// side is black.
fn median_color(cells: &[Rgb], mask: u32, inked: bool) -> Rgb {
    let mut channels: [Vec<u8>; 3] = Default::default();
    for (i, cell) in cells.iter().enumerate() {
        let set = mask & (1 << (BLOCK_CELLS - 1 - i)) != 0;
        if set == inked {
            channels[0].push(cell.r);
            channels[1].push(cell.g);
            channels[2].push(cell.b);
        }
    }
    if channels[0].is_empty() {
        return Rgb::BLACK;
    }
    let [r, g, b] = channels.map(|mut values| median(&mut values));
    Rgb::new(r, g, b)
}

fn median(values: &mut [u8]) -> u8 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        ((values[mid - 1] as u16 + values[mid] as u16) / 2) as u8
    }
}

/// Index and distance of the first catalog entry closest to `mask`.
fn closest(catalog: &[Glyph], mask: u32) -> (usize, u32) {
    catalog
        .iter()
        .enumerate()
        .fold((0, u32::MAX), |(best, best_dist), (i, glyph)| {
            let dist = hamming(mask, glyph.mask);
            if dist < best_dist {
                (i, dist)
            } else {
                (best, best_dist)
            }
        })
}
