//! Decoded images as pixel sources.

use std::path::Path;

use image::DynamicImage;

use super::band::Band;
use super::normalize::normalize;
use super::resample::Resampling;
use super::{PixelSource, Window};
use crate::error::{Result, TvError};
use crate::render::PixelBuffer;

/// Three bands of a decoded raster, read as red, green and blue.
#[derive(Debug, Clone)]
pub struct ImageSource {
    width: u32,
    height: u32,
    bands: [Band; 3],
}

impl ImageSource {
    /// Build a source from three bands of identical size.
    pub fn from_bands(bands: [Band; 3]) -> Result<Self> {
        let size = bands[0].size();
        if let Some(other) = bands.iter().find(|b| b.size() != size) {
            return Err(TvError::geometry(format!(
                "band sizes differ: {}x{} vs {}x{}",
                size.0,
                size.1,
                other.width(),
                other.height()
            )));
        }
        Ok(Self {
            width: size.0,
            height: size.1,
            bands,
        })
    }

    /// Pick the display bands of a decoded image.
    ///
    /// `selection` holds 1-based band numbers: three for red, green and blue,
    /// or one to show that band as gray. When empty, bands 1, 2 and 3 are
    /// used, and images with fewer than three bands show band 1 as gray.
    /// Single-band images always show band 1 as gray, whatever the selection.
    pub fn from_image(img: &DynamicImage, selection: &[usize]) -> Result<Self> {
        let bands = Band::split(img);
        let default_selection: &[usize] = if bands.len() < 3 { &[1] } else { &[1, 2, 3] };
        let selection = if selection.is_empty() || bands.len() == 1 {
            default_selection
        } else {
            selection
        };

        let pick = |n: usize| -> Result<Band> {
            n.checked_sub(1)
                .and_then(|i| bands.get(i))
                .cloned()
                .ok_or_else(|| {
                    TvError::invalid(format!(
                        "band {} out of range (image has {} bands)",
                        n,
                        bands.len()
                    ))
                })
        };

        let chosen = match *selection {
            [gray] => {
                let band = pick(gray)?;
                [band.clone(), band.clone(), band]
            }
            [r, g, b] => [pick(r)?, pick(g)?, pick(b)?],
            _ => {
                return Err(TvError::invalid(format!(
                    "expected 1 or 3 bands, got {}",
                    selection.len()
                )))
            }
        };
        Self::from_bands(chosen)
    }

    /// Decode an image file.
    pub fn open(path: impl AsRef<Path>, selection: &[usize]) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("decoding {}", path.display());
        let img = image::open(path)?;
        Self::from_image(&img, selection)
    }

    /// Decode an image held in memory.
    pub fn from_bytes(bytes: &[u8], selection: &[usize]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img, selection)
    }

    /// Combine the first band of the first three images as red, green, blue.
    ///
    /// Images past the third are ignored.
    pub fn stacked<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let [r, g, b, ..] = paths else {
            return Err(TvError::invalid(format!(
                "stacking needs 3 images, got {}",
                paths.len()
            )));
        };
        if paths.len() > 3 {
            log::warn!("stacking uses the first 3 of {} images", paths.len());
        }
        let first = |p: &P| -> Result<Band> {
            let img = image::open(p.as_ref())?;
            Band::split(&img)
                .into_iter()
                .next()
                .ok_or_else(|| {
                    TvError::invalid(format!("{} has no bands", p.as_ref().display()))
                })
        };
        Self::from_bands([first(r)?, first(g)?, first(b)?])
    }
}

impl PixelSource for ImageSource {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read(
        &self,
        window: Window,
        target_width: u32,
        target_height: u32,
        resampling: Resampling,
    ) -> Result<PixelBuffer> {
        window.check_within(self.size())?;
        let mut planes = Vec::with_capacity(3);
        for band in &self.bands {
            let resampled = band.resample(window, target_width, target_height, resampling)?;
            planes.push(normalize(&resampled)?);
        }
        PixelBuffer::from_planes(
            target_width as usize,
            target_height as usize,
            [&planes[0], &planes[1], &planes[2]],
        )
    }
}
