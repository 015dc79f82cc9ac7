//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the site root next to the data directory:
//!
//! ```text
//! site/
//! ├── config.toml          # Optional, overrides stock defaults
//! └── data/
//!     ├── about.json
//!     ├── portfolio.json
//!     ├── certs.json
//!     └── socials.json
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_dir = "data"         # Data directory, relative to the site root
//!
//! [carousel]
//! interval_ms = 4000        # Auto-advance period
//! reset_on_select = false   # Restart the timer after a bullet click
//!
//! [cards]
//! tech_badge_limit = 3      # Tech badges shown on a project card
//! excerpt_chars = 120       # Certification description excerpt length
//!
//! [site]
//! title = "Portfolio"
//! lang = "en"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the JSON data files, relative to the site root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Modal carousel behavior.
    pub carousel: CarouselConfig,
    /// Grid card presentation.
    pub cards: CardsConfig,
    /// Document-level settings for the rendered page.
    pub site: PageConfig,
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            carousel: CarouselConfig::default(),
            cards: CardsConfig::default(),
            site: PageConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be greater than 0".into(),
            ));
        }
        if self.cards.excerpt_chars == 0 {
            return Err(ConfigError::Validation(
                "cards.excerpt_chars must be greater than 0".into(),
            ));
        }
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::Validation("data_dir must not be empty".into()));
        }
        Ok(())
    }
}

/// Carousel timing and manual-navigation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// When true, a bullet click restarts the auto-advance timer so the next
    /// automatic advance comes a full interval later. When false, manual and
    /// automatic navigation run independently.
    pub reset_on_select: bool,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            reset_on_select: false,
        }
    }
}

/// Grid card presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsConfig {
    /// Tech badges shown on a project card before the `+N` overflow badge.
    pub tech_badge_limit: usize,
    /// Characters of a certification description shown on its card.
    pub excerpt_chars: usize,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            tech_badge_limit: 3,
            excerpt_chars: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document `<title>`.
    pub title: String,
    /// Document `lang` attribute.
    pub lang: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            lang: "en".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from the site root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge user values on top of stock defaults, reject unknown keys, and
/// validate the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory holding about.json, portfolio.json, certs.json and socials.json,
# relative to the site root.
data_dir = "data"

# ---------------------------------------------------------------------------
# Modal image carousel
# ---------------------------------------------------------------------------
[carousel]
# Milliseconds between automatic slide advances. Must be greater than 0.
interval_ms = 4000

# Restart the auto-advance timer when a bullet is clicked. When false, a
# timer firing shortly after a click moves on from the clicked slide.
reset_on_select = false

# ---------------------------------------------------------------------------
# Grid cards
# ---------------------------------------------------------------------------
[cards]
# Tech badges shown on a project card; the rest collapse into "+N".
tech_badge_limit = 3

# Characters of a certification description shown on its card.
excerpt_chars = 120

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
lang = "en"
"##
}
