//! Block-grid frame rendering with per-row color suppression.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::buffer::PixelBuffer;
use super::color::{ColorMode, RESET};
use super::{OutputMode, RenderConfig};
use crate::error::{Result, TvError};
use crate::glyph::{catalog_prefix, match_block, Glyph};

/// Last color sequences written on the current row.
///
/// A fresh state has nothing emitted, so the first block of every row
/// always writes both colors.
#[derive(Debug, Default)]
struct RowState {
    fg: Option<String>,
    bg: Option<String>,
}

impl RowState {
    fn push_fg(&mut self, out: &mut Vec<u8>, seq: String) {
        if self.fg.as_deref() != Some(seq.as_str()) {
            out.extend_from_slice(seq.as_bytes());
            self.fg = Some(seq);
        }
    }

    fn push_bg(&mut self, out: &mut Vec<u8>, seq: String) {
        if self.bg.as_deref() != Some(seq.as_str()) {
            out.extend_from_slice(seq.as_bytes());
            self.bg = Some(seq);
        }
    }
}

/// Renders pixel buffers as rows of colored glyphs.
pub struct FrameRenderer {
    catalog: &'static [Glyph],
    color: ColorMode,
    output: OutputMode,
    cancel: Option<Arc<AtomicBool>>,
}

impl FrameRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            catalog: catalog_prefix(config.glyphs),
            color: config.color,
            output: config.output,
            cancel: None,
        }
    }

    /// Stop at the next row boundary once `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Bytes for one block row, ending in a reset and a newline.
    pub fn render_row(&self, buffer: &PixelBuffer, block_row: usize) -> Vec<u8> {
        let (_, cols) = buffer.block_grid();
        let mut out = Vec::with_capacity(cols * 40);
        let mut state = RowState::default();

        for block_col in 0..cols {
            let m = match_block(&buffer.block(block_row, block_col), self.catalog);
            state.push_fg(&mut out, self.color.foreground(m.foreground));
            state.push_bg(&mut out, self.color.background(m.background));
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(m.glyph.encode_utf8(&mut utf8).as_bytes());
        }

        out.extend_from_slice(RESET.as_bytes());
        out.push(b'\n');
        out
    }

    /// Render the buffer into `sink` using the configured output mode.
    ///
    /// Rows are only ever written whole. On cancellation the rows finished so
    /// far are written followed by a reset, and `Interrupted` is returned.
    pub fn render_to<W: Write>(&self, buffer: &PixelBuffer, sink: &mut W) -> Result<()> {
        buffer.check_tiling()?;
        let (rows, cols) = buffer.block_grid();
        log::debug!(
            "rendering {}x{} blocks ({} glyphs, {} color, {:?} output)",
            cols,
            rows,
            self.catalog.len(),
            self.color.name(),
            self.output
        );

        let mut frame = Vec::new();
        for block_row in 0..rows {
            if self.cancelled() {
                frame.extend_from_slice(RESET.as_bytes());
                sink.write_all(&frame)?;
                sink.flush()?;
                return Err(TvError::Interrupted);
            }
            let row = self.render_row(buffer, block_row);
            match self.output {
                OutputMode::Line => {
                    sink.write_all(&row)?;
                    sink.flush()?;
                }
                OutputMode::Raw => frame.extend(row),
            }
        }

        if self.output == OutputMode::Raw {
            sink.write_all(&frame)?;
            sink.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Rgb;

    fn renderer(color: ColorMode) -> FrameRenderer {
        FrameRenderer::new(&RenderConfig {
            color,
            ..RenderConfig::default()
        })
    }

    #[test]
    fn test_repeated_colors_are_emitted_once_per_row() {
        let buf = PixelBuffer::filled(16, 8, Rgb::new(40, 50, 60));
        let row = renderer(ColorMode::TrueColor).render_row(&buf, 0);
        let text = String::from_utf8(row).unwrap();
        assert_eq!(
            text,
            "\x1b[38;2;0;0;0m\x1b[48;2;40;50;60m    \x1b[0m\n"
        );
    }

    #[test]
    fn test_palette_mode_suppresses_on_encoded_sequence() {
        // Two different grays that snap to the same cube cell.
        let mut buf = PixelBuffer::filled(8, 8, Rgb::new(100, 100, 100));
        for row in 0..8 {
            for col in 4..8 {
                buf.set_pixel(row, col, Rgb::new(110, 110, 110));
            }
        }
        let text = String::from_utf8(renderer(ColorMode::Palette256).render_row(&buf, 0)).unwrap();
        assert_eq!(text.matches("\x1b[48;5;").count(), 1);
        assert_eq!(text.matches("\x1b[38;5;").count(), 1);
    }

    #[test]
    fn test_state_resets_every_row() {
        let buf = PixelBuffer::filled(4, 16, Rgb::new(1, 2, 3));
        let mut out = Vec::new();
        renderer(ColorMode::TrueColor).render_to(&buf, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            assert!(line.starts_with("\x1b[38;2;0;0;0m\x1b[48;2;1;2;3m"));
            assert!(line.ends_with(RESET));
        }
    }

    #[test]
    fn test_render_rejects_untiled_buffer() {
        let buf = PixelBuffer::filled(5, 8, Rgb::BLACK);
        let mut sink = Vec::new();
        let result = renderer(ColorMode::TrueColor).render_to(&buf, &mut sink);
        assert!(matches!(result, Err(TvError::Geometry(_))));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_cancel_stops_before_first_row() {
        let flag = Arc::new(AtomicBool::new(true));
        let r = renderer(ColorMode::TrueColor).with_cancel(flag);
        let buf = PixelBuffer::filled(4, 8, Rgb::BLACK);
        let mut sink = Vec::new();
        let result = r.render_to(&buf, &mut sink);
        assert!(matches!(result, Err(TvError::Interrupted)));
        assert_eq!(sink, RESET.as_bytes());
    }

    /// Sink that raises the cancel flag once the first row reaches it.
    struct CancelOnWrite {
        written: Vec<u8>,
        flag: Arc<AtomicBool>,
    }

    impl Write for CancelOnWrite {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            self.flag.store(true, Ordering::SeqCst);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cancel_mid_frame_keeps_finished_rows() {
        let flag = Arc::new(AtomicBool::new(false));
        let r = FrameRenderer::new(&RenderConfig {
            output: OutputMode::Line,
            ..RenderConfig::default()
        })
        .with_cancel(Arc::clone(&flag));
        let buf = PixelBuffer::filled(8, 24, Rgb::new(9, 9, 9));
        let first_row = r.render_row(&buf, 0);

        let mut sink = CancelOnWrite {
            written: Vec::new(),
            flag,
        };
        let result = r.render_to(&buf, &mut sink);

        assert!(matches!(result, Err(TvError::Interrupted)));
        let mut expected = first_row;
        expected.extend_from_slice(RESET.as_bytes());
        assert_eq!(sink.written, expected);
    }

    #[test]
    fn test_line_and_raw_modes_produce_identical_bytes() {
        let mut buf = PixelBuffer::filled(8, 16, Rgb::new(10, 20, 30));
        buf.set_pixel(3, 5, Rgb::new(250, 20, 30));
        let mut line = Vec::new();
        let mut raw = Vec::new();
        FrameRenderer::new(&RenderConfig {
            output: OutputMode::Line,
            ..RenderConfig::default()
        })
        .render_to(&buf, &mut line)
        .unwrap();
        FrameRenderer::new(&RenderConfig {
            output: OutputMode::Raw,
            ..RenderConfig::default()
        })
        .render_to(&buf, &mut raw)
        .unwrap();
        assert_eq!(line, raw);
    }
}
