//! # Configuration
//!
//! Display settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.boxline/config.toml`. Every field is optional; a
//! missing file means "all defaults".

use log::{debug, info, warn};
use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::tui::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoxlineConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Foreground colors per theme slot. Values are anything ratatui's
/// `Color::from_str` accepts: `"cyan"`, `"#ff8800"`, `"208"`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// `"default"` or `"monochrome"`.
    pub preset: Option<String>,
    pub border: Option<String>,
    pub active_border: Option<String>,
    pub error: Option<String>,
    pub title: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub muted: Option<String>,
    pub diff_from: Option<String>,
    pub diff_to: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Fixed render width; unset means "ask the terminal".
    pub width: Option<usize>,
    pub page_size: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Width used when neither flags, config nor the terminal provide one.
pub const FALLBACK_WIDTH: usize = 80;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    /// `None` = use the live terminal width.
    pub width: Option<usize>,
    pub page_size: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.boxline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".boxline").join("config.toml"))
}

/// Load config from `path`, or from [`config_path`] when `None`.
///
/// A missing file yields `BoxlineConfig::default()`. A malformed one is a
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<BoxlineConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BoxlineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(BoxlineConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<BoxlineConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → config file → CLI flags into concrete values.
pub fn resolve(config: &BoxlineConfig, cli_width: Option<usize>) -> ResolvedConfig {
    ResolvedConfig {
        theme: resolve_theme(&config.theme),
        width: cli_width.or(config.display.width),
        page_size: config
            .display
            .page_size
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE),
    }
}

/// Start from the preset, then recolor any slot the file names.
fn resolve_theme(config: &ThemeConfig) -> Theme {
    let mut theme = match config.preset.as_deref() {
        None | Some("default") => Theme::default(),
        Some("monochrome") => Theme::monochrome(),
        Some(other) => {
            warn!("Unknown theme preset {other:?}, using default");
            Theme::default()
        }
    };

    recolor(&mut theme.border, config.border.as_deref());
    recolor(&mut theme.active_border, config.active_border.as_deref());
    recolor(&mut theme.error_border, config.error.as_deref());
    recolor(&mut theme.error_title, config.error.as_deref());
    recolor(&mut theme.title, config.title.as_deref());
    recolor(&mut theme.label, config.label.as_deref());
    recolor(&mut theme.value, config.value.as_deref());
    recolor(&mut theme.muted, config.muted.as_deref());
    recolor(&mut theme.hint_desc, config.muted.as_deref());
    recolor(&mut theme.diff_from, config.diff_from.as_deref());
    recolor(&mut theme.diff_to, config.diff_to.as_deref());
    recolor(&mut theme.grid_header, config.accent.as_deref());
    recolor(&mut theme.hint_key, config.accent.as_deref());
    if let Some(color) = config.accent.as_deref().and_then(parse_color) {
        theme.active_row = theme.active_row.bg(color);
    }
    theme
}

/// Replace the foreground color, keeping modifiers.
fn recolor(style: &mut Style, color: Option<&str>) {
    if let Some(color) = color.and_then(parse_color) {
        *style = style.fg(color);
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match Color::from_str(s) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Ignoring invalid color {s:?} in config");
            None
        }
    }
}
