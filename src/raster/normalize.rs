//! Contrast stretch of arbitrary-range bands into displayable bytes.

use super::band::{Band, Samples};
use crate::error::{Result, TvError};

/// Sample every band-wide constant maps to.
const FLAT_LEVEL: u8 = 128;

/// Convert a band to 8-bit samples.
///
/// 8-bit bands pass through untouched. Anything else is stretched linearly
/// so its observed minimum maps to 0 and maximum to 255. The range is taken
/// from this band alone, so the result is a per-image contrast stretch and
/// not a calibrated conversion. Non-finite samples are left out of the range
/// and map to 0.
pub fn normalize(band: &Band) -> Result<Vec<u8>> {
    match band.samples() {
        Samples::U8(v) if v.is_empty() => Err(TvError::invalid("cannot normalize an empty band")),
        Samples::U8(v) => Ok(v.clone()),
        Samples::U16(v) => stretch(v.iter().map(|&s| s as f64)),
        Samples::F32(v) => stretch(v.iter().map(|&s| s as f64)),
    }
}

fn stretch<I>(samples: I) -> Result<Vec<u8>>
where
    I: Iterator<Item = f64> + Clone,
{
    let mut range: Option<(f64, f64)> = None;
    let mut count = 0usize;
    for s in samples.clone() {
        count += 1;
        if s.is_finite() {
            range = Some(match range {
                None => (s, s),
                Some((lo, hi)) => (lo.min(s), hi.max(s)),
            });
        }
    }
    if count == 0 {
        return Err(TvError::invalid("cannot normalize an empty band"));
    }
    let Some((cmin, cmax)) = range else {
        return Err(TvError::invalid("band has no finite samples"));
    };

    if cmax == cmin {
        log::debug!("flat band at {}, mapping to mid gray", cmin);
        return Ok(vec![FLAT_LEVEL; count]);
    }

    let scale = 255.0 / (cmax - cmin);
    log::debug!("stretching band range {}..{} to 0..255", cmin, cmax);
    Ok(samples
        .map(|s| {
            if s.is_finite() {
                ((s - cmin) * scale).round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        })
        .collect())
}
