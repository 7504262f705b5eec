//! Effective settings merged from CLI flags, the config file and defaults.

use std::time::Duration;

use crate::cli::Args;
use crate::config::{Config, ConfigError};
use crate::fetch::DEFAULT_FETCH_TIMEOUT;
use crate::glyph::CATALOG_LEN;
use crate::raster::{Resampling, Window};
use crate::render::{ColorMode, OutputMode, RenderConfig};

/// Everything a viewing session needs, after precedence is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Output width in glyph columns; `None` means the terminal width.
    pub columns: Option<u32>,
    pub window: Option<Window>,
    /// 1-based band selection, empty for the image's default.
    pub bands: Vec<usize>,
    pub render: RenderConfig,
    pub fetch_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: None,
            window: None,
            bands: Vec::new(),
            render: RenderConfig::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl Settings {
    /// Apply CLI > config file > default precedence.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, ConfigError> {
        let section = &config.render;

        let resample = match args.resample {
            Some(r) => r.into(),
            None => match &section.resample {
                Some(name) => Resampling::from_name(name).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        key: "render.resample",
                        value: name.clone(),
                    }
                })?,
                None => Resampling::default(),
            },
        };

        let color = match args.color {
            Some(c) => c.into(),
            None => match &section.color {
                Some(name) => {
                    ColorMode::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                        key: "render.color",
                        value: name.clone(),
                    })?
                }
                None => ColorMode::default(),
            },
        };

        let output = match args.output {
            Some(o) => o.into(),
            None => match &section.output {
                Some(name) => {
                    OutputMode::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                        key: "render.output",
                        value: name.clone(),
                    })?
                }
                None => OutputMode::default(),
            },
        };

        let glyphs = args
            .glyphs
            .or(section.glyphs)
            .unwrap_or(CATALOG_LEN)
            .clamp(1, CATALOG_LEN);

        let columns = args.width.or(section.width);
        if columns == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "render.width",
                value: "0".to_string(),
            });
        }

        let window = args
            .srcwin
            .as_deref()
            .map(|v| match v {
                [x, y, w, h] => Ok(Window::new(*x, *y, *w, *h)),
                _ => Err(ConfigError::InvalidValue {
                    key: "srcwin",
                    value: format!("{:?}", v),
                }),
            })
            .transpose()?;

        let fetch_timeout = config
            .fetch
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);

        Ok(Self {
            columns,
            window,
            bands: args.bands.clone(),
            render: RenderConfig {
                glyphs,
                color,
                resample,
                output,
            },
            fetch_timeout,
        })
    }
}
