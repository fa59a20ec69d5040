//! Rain configuration: JSON file, environment and command-line overrides.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rain::canvas::CanvasSettings;
use crate::rain::column::ColumnRanges;
use crate::rain::glyph_cell::Shimmer;
use crate::rain::glyphs::GlyphAlphabet;
use crate::rain::layout::ESTIMATED_COLUMN_WIDTH;
use crate::rain::metrics::CellMetrics;
use crate::render::{Palette, Projection};
use crate::ui::core::style::Color;

pub const CONFIG_ENV: &str = "MATRIX_RAIN_CONFIG";
const APP_DIR: &str = "matrix-rain";
const CONFIG_FILE: &str = "config.json";
/// Longest column a config may ask for; every column allocates its glyphs up front.
pub const MAX_CHAR_COUNT: usize = 4096;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub column_width: f64,
    pub ranges: ColumnRanges,
    pub alphabet: String,
    pub glyph_interval_ms: u64,
    pub substitution_percent: u32,
    pub glyph_color: String,
    pub highlight_color: String,
    pub background: String,
    pub cell: CellMetrics,
    pub bold_font_size: u8,
    /// Frames per second; `0` renders as fast as the terminal accepts, which is
    /// the closest a terminal gets to a refresh-driven loop.
    pub fps_cap: u32,
    pub seed: Option<u64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            column_width: ESTIMATED_COLUMN_WIDTH,
            ranges: ColumnRanges::default(),
            alphabet: "01".to_string(),
            glyph_interval_ms: 500,
            substitution_percent: 2,
            glyph_color: "#03A062".to_string(),
            highlight_color: "#A8FFD0".to_string(),
            background: "#000000".to_string(),
            cell: CellMetrics::default(),
            bold_font_size: 19,
            fps_cap: 60,
            seed: None,
        }
    }
}

impl RainConfig {
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RainConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.column_width > 0.0) || !self.column_width.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "column_width must be positive, got {}",
                self.column_width
            )));
        }
        let r = &self.ranges;
        if !r.char_count.is_valid() || r.char_count.max > MAX_CHAR_COUNT {
            return Err(ConfigError::Invalid(format!(
                "ranges.char_count must satisfy min <= max <= {MAX_CHAR_COUNT}, got {}..={}",
                r.char_count.min, r.char_count.max
            )));
        }
        if !r.font_size.is_valid() || r.font_size.min == 0 {
            return Err(ConfigError::Invalid(
                "ranges.font_size must be a non-empty range of positive sizes".into(),
            ));
        }
        if !(r.speed.min > 0.0) || !r.speed.is_valid() || !(r.speed.max - r.speed.min).is_finite() {
            return Err(ConfigError::Invalid(format!(
                "ranges.speed must be a finite range of positive speeds, got {}..={}",
                r.speed.min, r.speed.max
            )));
        }
        if GlyphAlphabet::from_str_chars(&self.alphabet).is_none() {
            return Err(ConfigError::Invalid("alphabet is empty".into()));
        }
        if self.substitution_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "substitution_percent must be <= 100, got {}",
                self.substitution_percent
            )));
        }
        for (name, value) in [
            ("glyph_color", &self.glyph_color),
            ("highlight_color", &self.highlight_color),
            ("background", &self.background),
        ] {
            if Color::from_hex(value).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be #RRGGBB, got {value:?}"
                )));
            }
        }
        if !(self.cell.px_per_col > 0.0) || !(self.cell.px_per_row > 0.0) {
            return Err(ConfigError::Invalid(
                "cell metrics must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn alphabet(&self) -> GlyphAlphabet {
        GlyphAlphabet::from_str_chars(&self.alphabet).unwrap_or_default()
    }

    pub fn shimmer(&self) -> Shimmer {
        Shimmer {
            interval: self.glyph_interval_ms as f64 / 1000.0,
            percent: self.substitution_percent,
        }
    }

    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            column_width: self.column_width,
            ranges: self.ranges,
            alphabet: self.alphabet(),
            shimmer: self.shimmer(),
        }
    }

    pub fn projection(&self) -> Projection {
        let defaults = Palette::default();
        Projection {
            cell: self.cell,
            palette: Palette {
                glyph: Color::from_hex(&self.glyph_color).unwrap_or(defaults.glyph),
                highlight: Color::from_hex(&self.highlight_color).unwrap_or(defaults.highlight),
                background: Color::from_hex(&self.background).unwrap_or(defaults.background),
            },
            bold_font_size: self.bold_font_size,
        }
    }

    pub fn apply(&mut self, overrides: &CliOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(fps) = overrides.fps {
            self.fps_cap = fps;
        }
        if let Some(alphabet) = overrides.alphabet.as_ref() {
            self.alphabet = alphabet.clone();
        }
    }
}

/// Flags accepted by the `matrix-rain` binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub fps: Option<u32>,
    pub alphabet: Option<String>,
}

impl CliOverrides {
    /// Unknown or malformed flags are ignored with a warning.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--config=") {
                out.config = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                out.seed = value.parse().ok().or(out.seed);
            } else if let Some(value) = arg.strip_prefix("--fps=") {
                out.fps = value.parse().ok().or(out.fps);
            } else if let Some(value) = arg.strip_prefix("--alphabet=") {
                out.alphabet = Some(value.to_string());
            } else {
                tracing::warn!(arg, "ignoring unknown argument");
            }
        }
        out
    }
}

/// `--config=`, then `$MATRIX_RAIN_CONFIG`, then the per-user config dir.
pub fn resolve_config_path(cli: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    default_config_path()
}

pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
