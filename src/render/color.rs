//! Terminal color escape sequences.

use crate::glyph::Rgb;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// The six intensities of each axis of the xterm 6x6x6 color cube.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Midpoints between adjacent cube levels, stored doubled to stay integral.
const CUBE_SNAP_X2: [u16; 5] = cube_snap_x2();

const fn cube_snap_x2() -> [u16; 5] {
    let mut snap = [0u16; 5];
    let mut i = 0;
    while i < 5 {
        snap[i] = CUBE_LEVELS[i] as u16 + CUBE_LEVELS[i + 1] as u16;
        i += 1;
    }
    snap
}

/// How colors are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit `38;2;R;G;B` sequences.
    #[default]
    TrueColor,
    /// Indexed `38;5;N` sequences snapped to the 6x6x6 cube.
    Palette256,
}

impl ColorMode {
    /// Sequence setting the foreground color.
    pub fn foreground(&self, color: Rgb) -> String {
        self.sequence(38, color)
    }

    /// Sequence setting the background color.
    pub fn background(&self, color: Rgb) -> String {
        self.sequence(48, color)
    }

    fn sequence(&self, target: u8, c: Rgb) -> String {
        match self {
            ColorMode::TrueColor => format!("\x1b[{};2;{};{};{}m", target, c.r, c.g, c.b),
            ColorMode::Palette256 => format!("\x1b[{};5;{}m", target, palette_index(c)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::TrueColor => "truecolor",
            ColorMode::Palette256 => "256",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "truecolor" | "24bit" => Some(ColorMode::TrueColor),
            "256" => Some(ColorMode::Palette256),
            _ => None,
        }
    }
}

/// Cube axis index (0-5) of a channel value: the number of level midpoints
/// strictly below it.
pub fn cube_index(value: u8) -> u8 {
    let doubled = value as u16 * 2;
    CUBE_SNAP_X2.iter().filter(|&&snap| snap < doubled).count() as u8
}

/// xterm 256-color palette code of the cube cell nearest to `color`.
pub fn palette_index(color: Rgb) -> u8 {
    16 + 36 * cube_index(color.r) + 6 * cube_index(color.g) + cube_index(color.b)
}
