//! Resampling of single-band sample planes.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Primitive};

use super::Window;
use crate::error::{Result, TvError};

/// Resampling kernel used when reading a window at a different size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampling {
    Nearest,
    Bilinear,
    Cubic,
    CubicSpline,
    Lanczos,
    /// Mean of the source pixels under each target pixel.
    #[default]
    Average,
    /// Most frequent source value under each target pixel.
    Mode,
}

impl Resampling {
    pub const ALL: [Resampling; 7] = [
        Resampling::Nearest,
        Resampling::Bilinear,
        Resampling::Cubic,
        Resampling::CubicSpline,
        Resampling::Lanczos,
        Resampling::Average,
        Resampling::Mode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resampling::Nearest => "nearest",
            Resampling::Bilinear => "bilinear",
            Resampling::Cubic => "cubic",
            Resampling::CubicSpline => "cubicspline",
            Resampling::Lanczos => "lanczos",
            Resampling::Average => "average",
            Resampling::Mode => "mode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// The `image` filter for convolution-based modes; `None` for area modes.
    fn filter(&self) -> Option<FilterType> {
        match self {
            Resampling::Nearest => Some(FilterType::Nearest),
            Resampling::Bilinear => Some(FilterType::Triangle),
            Resampling::Cubic => Some(FilterType::CatmullRom),
            Resampling::CubicSpline => Some(FilterType::Gaussian),
            Resampling::Lanczos => Some(FilterType::Lanczos3),
            Resampling::Average | Resampling::Mode => None,
        }
    }
}

/// Copy the samples of `window` out of a row-major plane `width` wide.
pub(super) fn crop<T: Copy>(plane: &[T], width: u32, window: &Window) -> Vec<T> {
    let mut out = Vec::with_capacity(window.width as usize * window.height as usize);
    for row in window.y..window.y + window.height {
        let start = (row * width + window.x) as usize;
        out.extend_from_slice(&plane[start..start + window.width as usize]);
    }
    out
}

/// Resize a whole plane with an `image` convolution filter.
///
/// Float planes must already be scaled into `0.0..=1.0`, the range the
/// filters clamp floating point samples to.
pub(super) fn filter_plane<T>(
    plane: Vec<T>,
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
    mode: Resampling,
) -> Result<Vec<T>>
where
    T: Primitive + 'static,
{
    let Some(filter) = mode.filter() else {
        return Err(TvError::invalid(format!(
            "{} resampling is not a convolution filter",
            mode.name()
        )));
    };
    let img: ImageBuffer<Luma<T>, Vec<T>> = ImageBuffer::from_raw(width, height, plane)
        .ok_or_else(|| {
            TvError::geometry(format!(
                "plane does not hold {}x{} samples",
                width, height
            ))
        })?;
    Ok(imageops::resize(&img, target_width, target_height, filter).into_raw())
}

/// Resize a whole plane by reducing the source pixels under each target pixel.
///
/// Every target pixel covers at least one source pixel, so upsampling
/// degrades to nearest-neighbour.
pub(super) fn area_plane(
    plane: &[f64],
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
    mode: Resampling,
) -> Vec<f64> {
    let cell_w = width as f64 / target_width as f64;
    let cell_h = height as f64 / target_height as f64;
    let mut out = Vec::with_capacity(target_width as usize * target_height as usize);
    let mut footprint = Vec::new();

    for ty in 0..target_height {
        let (start_y, end_y) = span(ty, cell_h, height);
        for tx in 0..target_width {
            let (start_x, end_x) = span(tx, cell_w, width);

            footprint.clear();
            for py in start_y..end_y {
                let row = (py * width) as usize;
                footprint.extend_from_slice(&plane[row + start_x as usize..row + end_x as usize]);
            }

            out.push(match mode {
                Resampling::Mode => most_frequent(&mut footprint),
                _ => footprint.iter().sum::<f64>() / footprint.len() as f64,
            });
        }
    }

    out
}

/// Source pixel range covered by target index `i`.
fn span(i: u32, cell: f64, limit: u32) -> (u32, u32) {
    let start = ((i as f64 * cell) as u32).min(limit - 1);
    let end = (((i + 1) as f64 * cell) as u32).clamp(start + 1, limit);
    (start, end)
}

/// Most frequent value; the smallest one wins ties.
fn most_frequent(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mut best = values[0];
    let mut best_run = 0;
    let mut run = 0;
    for i in 0..values.len() {
        if i > 0 && values[i] == values[i - 1] {
            run += 1;
        } else {
            run = 1;
        }
        if run > best_run {
            best_run = run;
            best = values[i];
        }
    }
    best
}
