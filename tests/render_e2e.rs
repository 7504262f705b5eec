//! End-to-end tests: decoded images in, terminal bytes out.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb as ImgRgb, RgbImage};

use textview::error::TvError;
use textview::raster::{ImageSource, PixelSource, Resampling, Window};
use textview::render::{self, ColorMode, FrameRenderer, OutputMode, RenderConfig, RESET};

fn render_image(img: &DynamicImage, columns: u32, config: RenderConfig) -> Vec<u8> {
    let source = ImageSource::from_image(img, &[]).unwrap();
    let renderer = FrameRenderer::new(&config);
    let mut out = Vec::new();
    render::show(&source, None, columns, config.resample, &renderer, &mut out).unwrap();
    out
}

fn gray_image(size: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(size, size, Luma([value])))
}

// ==================== Geometry Tests ====================

#[test]
fn test_uniform_gray_renders_blank_rows() {
    let out = render_image(&gray_image(32, 128), 8, RenderConfig::default());
    let text = String::from_utf8(out).unwrap();

    let expected_row = format!(
        "\x1b[38;2;0;0;0m\x1b[48;2;128;128;128m{}{}",
        " ".repeat(8),
        RESET
    );
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert_eq!(row, expected_row);
    }
}

#[test]
fn test_every_row_ends_with_reset() {
    let img = RgbImage::from_fn(40, 24, |x, y| ImgRgb([(x * 6) as u8, (y * 10) as u8, 90]));
    let out = render_image(&DynamicImage::ImageRgb8(img), 10, RenderConfig::default());
    let text = String::from_utf8(out).unwrap();

    // 10 columns -> 40 px wide; 24/40 * 40 / 8 = 3 rows.
    assert_eq!(text.lines().count(), 3);
    for row in text.lines() {
        assert!(row.ends_with(RESET));
        assert!(row.starts_with("\x1b[38;2;"));
    }
}

#[test]
fn test_tiny_image_still_gets_one_row() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 2, ImgRgb([5, 5, 5])));
    let out = render_image(&img, 4, RenderConfig::default());
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_window_outside_raster_is_rejected() {
    let source = ImageSource::from_image(&gray_image(16, 1), &[]).unwrap();
    let renderer = FrameRenderer::new(&RenderConfig::default());
    let mut out = Vec::new();
    let err = render::show(
        &source,
        Some(Window::new(10, 0, 10, 10)),
        2,
        Resampling::Nearest,
        &renderer,
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, TvError::Geometry(_)));
    assert!(out.is_empty());
}

// ==================== Color Mode Tests ====================

#[test]
fn test_palette_mode_white_block() {
    let config = RenderConfig {
        color: ColorMode::Palette256,
        ..RenderConfig::default()
    };
    let out = render_image(&gray_image(8, 255), 2, config);
    let text = String::from_utf8(out).unwrap();
    // 8x8 at 2 columns -> 8x8 px -> one row of two blocks.
    assert_eq!(text, format!("\x1b[38;5;16m\x1b[48;5;231m  {}\n", RESET));
}

#[test]
fn test_line_and_raw_output_match() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 32, |x, y| {
        ImgRgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
    }));
    let line = render_image(
        &img,
        8,
        RenderConfig {
            output: OutputMode::Line,
            ..RenderConfig::default()
        },
    );
    let raw = render_image(&img, 8, RenderConfig::default());
    assert_eq!(line, raw);
}

// ==================== Band Tests ====================

#[test]
fn test_u16_flat_band_maps_to_mid_gray() {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(8, 8, Luma([1000]));
    let source = ImageSource::from_image(&DynamicImage::ImageLuma16(img), &[]).unwrap();
    let buffer = source
        .read(Window::full(source.size()), 4, 8, Resampling::Nearest)
        .unwrap();
    assert!(buffer.as_bytes().iter().all(|&v| v == 128));
}

#[test]
fn test_band_selection_reorders_channels() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, ImgRgb([10, 20, 30])));
    let source = ImageSource::from_image(&img, &[3, 2, 1]).unwrap();
    let buffer = source
        .read(Window::full(source.size()), 4, 8, Resampling::Nearest)
        .unwrap();
    assert_eq!(&buffer.as_bytes()[..3], &[30, 20, 10]);
}

#[test]
fn test_band_out_of_range_is_invalid() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, ImgRgb([1, 2, 3])));
    let err = ImageSource::from_image(&img, &[4]).unwrap_err();
    assert!(matches!(err, TvError::InvalidInput(_)));
}

#[test]
fn test_gray_image_with_rgb_bands_renders_gray() {
    let source = ImageSource::from_image(&gray_image(8, 200), &[1, 2, 3]).unwrap();
    let renderer = FrameRenderer::new(&RenderConfig::default());
    let mut out = Vec::new();
    render::show(&source, None, 2, Resampling::Nearest, &renderer, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\x1b[48;2;200;200;200m"));
}

// ==================== Interrupt Tests ====================

#[test]
fn test_cancelled_render_writes_only_reset() {
    let source = ImageSource::from_image(&gray_image(32, 50), &[]).unwrap();
    let flag = Arc::new(AtomicBool::new(true));
    let renderer = FrameRenderer::new(&RenderConfig::default()).with_cancel(flag);
    let mut out = Vec::new();
    let err = render::show(&source, None, 8, Resampling::Average, &renderer, &mut out).unwrap_err();
    assert!(matches!(err, TvError::Interrupted));
    assert_eq!(out, RESET.as_bytes());
}
