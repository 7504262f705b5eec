//! Configuration file handling for textview.
//!
//! Loads configuration from `~/.config/textview/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for textview.
/// Loaded from ~/.config/textview/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub fetch: FetchSection,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct RenderSection {
    /// Output width in glyph columns (default: terminal width)
    #[serde(default)]
    pub width: Option<u32>,
    /// Resampling mode name
    #[serde(default)]
    pub resample: Option<String>,
    /// "truecolor" or "256"
    #[serde(default)]
    pub color: Option<String>,
    /// Number of catalog glyphs to match against
    #[serde(default)]
    pub glyphs: Option<usize>,
    /// "line" or "raw"
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FetchSection {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# textview configuration

[render]
# Output width in glyph columns (default: terminal width)
# width = 80
# Resampling: nearest, bilinear, cubic, cubicspline, lanczos, average, mode
resample = "average"
# Color mode: truecolor or 256
color = "truecolor"
# Number of catalog glyphs to match against (1-57)
glyphs = 57
# Output buffering: line (flush every row) or raw (single write)
output = "raw"

[fetch]
# Seconds before a remote image download is abandoned
timeout_secs = 15
"#;

impl Config {
    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicitly requested path, which must exist.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' does not exist", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for config key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("textview").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/textview/config.toml")
        })
}
