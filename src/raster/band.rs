//! Single-channel sample planes split out of decoded images.

use image::DynamicImage;

use super::resample::{area_plane, crop, filter_plane, Resampling};
use super::Window;
use crate::error::{Result, TvError};

/// Row-major samples of one band, in the image's native sample type.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
            Samples::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn type_name(&self) -> &'static str {
        match self {
            Samples::U8(_) => "u8",
            Samples::U16(_) => "u16",
            Samples::F32(_) => "f32",
        }
    }
}

/// One channel of a raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    width: u32,
    height: u32,
    samples: Samples,
}

impl Band {
    pub fn new(width: u32, height: u32, samples: Samples) -> Result<Self> {
        if samples.len() != width as usize * height as usize {
            return Err(TvError::invalid(format!(
                "band of {} samples does not match {}x{}",
                samples.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Split a decoded image into its bands, keeping the native sample type.
    pub fn split(img: &DynamicImage) -> Vec<Band> {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count() as usize;
        let planes: Vec<Samples> = match img {
            DynamicImage::ImageLuma8(b) => split_planes(b.as_raw(), 1, Samples::U8),
            DynamicImage::ImageLumaA8(b) => split_planes(b.as_raw(), 2, Samples::U8),
            DynamicImage::ImageRgb8(b) => split_planes(b.as_raw(), 3, Samples::U8),
            DynamicImage::ImageRgba8(b) => split_planes(b.as_raw(), 4, Samples::U8),
            DynamicImage::ImageLuma16(b) => split_planes(b.as_raw(), 1, Samples::U16),
            DynamicImage::ImageLumaA16(b) => split_planes(b.as_raw(), 2, Samples::U16),
            DynamicImage::ImageRgb16(b) => split_planes(b.as_raw(), 3, Samples::U16),
            DynamicImage::ImageRgba16(b) => split_planes(b.as_raw(), 4, Samples::U16),
            DynamicImage::ImageRgb32F(b) => split_planes(b.as_raw(), 3, Samples::F32),
            DynamicImage::ImageRgba32F(b) => split_planes(b.as_raw(), 4, Samples::F32),
            other => split_planes(other.to_rgb8().as_raw(), 3, Samples::U8),
        };
        log::debug!(
            "split {}x{} image into {} bands ({} channels decoded)",
            width,
            height,
            planes.len(),
            channels
        );
        planes
            .into_iter()
            .map(|samples| Band {
                width,
                height,
                samples,
            })
            .collect()
    }

    /// Sample `window` of this band into a `target_width` x `target_height` band.
    pub fn resample(
        &self,
        window: Window,
        target_width: u32,
        target_height: u32,
        mode: Resampling,
    ) -> Result<Band> {
        window.check_within(self.size())?;
        if target_width == 0 || target_height == 0 {
            return Err(TvError::geometry(format!(
                "cannot resample to {}x{}",
                target_width, target_height
            )));
        }
        let (w, h, tw, th) = (window.width, window.height, target_width, target_height);

        let samples = match (&self.samples, mode) {
            (samples, Resampling::Average | Resampling::Mode) => {
                let plane: Vec<f64> = match samples {
                    Samples::U8(v) => {
                        crop(v, self.width, &window).into_iter().map(f64::from).collect()
                    }
                    Samples::U16(v) => {
                        crop(v, self.width, &window).into_iter().map(f64::from).collect()
                    }
                    Samples::F32(v) => {
                        crop(v, self.width, &window).into_iter().map(f64::from).collect()
                    }
                };
                let out = area_plane(&plane, w, h, tw, th, mode);
                match samples {
                    Samples::U8(_) => Samples::U8(
                        out.iter()
                            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
                            .collect(),
                    ),
                    Samples::U16(_) => Samples::U16(
                        out.iter()
                            .map(|&v| v.round().clamp(0.0, 65535.0) as u16)
                            .collect(),
                    ),
                    Samples::F32(_) => Samples::F32(out.iter().map(|&v| v as f32).collect()),
                }
            }
            (Samples::U8(v), _) => {
                Samples::U8(filter_plane(crop(v, self.width, &window), w, h, tw, th, mode)?)
            }
            (Samples::U16(v), _) => {
                Samples::U16(filter_plane(crop(v, self.width, &window), w, h, tw, th, mode)?)
            }
            (Samples::F32(v), _) => {
                // Convolution filters clamp floats to 0..=1, so resample in that
                // range. The later contrast stretch undoes the affine map.
                let plane = crop(v, self.width, &window);
                let (lo, hi) = finite_range(&plane).unwrap_or((0.0, 1.0));
                let span = if hi > lo { hi - lo } else { 1.0 };
                let unit: Vec<f32> = plane
                    .iter()
                    .map(|&s| if s.is_finite() { (s - lo) / span } else { 0.0 })
                    .collect();
                Samples::F32(filter_plane(unit, w, h, tw, th, mode)?)
            }
        };

        log::trace!(
            "resampled {} band {} to {}x{} ({})",
            self.samples.type_name(),
            window,
            tw,
            th,
            mode.name()
        );
        Band::new(tw, th, samples)
    }
}

fn split_planes<T: Copy>(data: &[T], channels: usize, wrap: fn(Vec<T>) -> Samples) -> Vec<Samples> {
    deinterleave(data, channels).into_iter().map(wrap).collect()
}

/// Split interleaved samples into `channels` planes.
fn deinterleave<T: Copy>(data: &[T], channels: usize) -> Vec<Vec<T>> {
    let mut planes: Vec<Vec<T>> = (0..channels)
        .map(|_| Vec::with_capacity(data.len() / channels))
        .collect();
    for pixel in data.chunks_exact(channels) {
        for (plane, &sample) in planes.iter_mut().zip(pixel) {
            plane.push(sample);
        }
    }
    planes
}

fn finite_range(samples: &[f32]) -> Option<(f32, f32)> {
    samples
        .iter()
        .filter(|s| s.is_finite())
        .fold(None, |acc, &s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
}
