//! Showcase configuration.
//!
//! Handles loading, validating, and merging `showcase.toml`. Stock defaults
//! match the published page, so the file is optional and sparse: override only
//! the values you need.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! manifest = "static/data/picabench-results.json"  # Results manifest
//! asset_root = "."                                # Directory image paths are relative to
//!
//! [carousel]
//! interval_ms = 2000          # Auto-advance period
//!
//! [gallery]
//! flip_interval_ms = 1200     # Input/output flip period in auto mode
//! max_cards = 8               # Cards shown per case
//! excluded_prefixes = ["005"] # Method ids hidden from the grid
//! initial_mode = "auto"       # "auto" or "interactive"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::gallery::Mode;
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Path to the results manifest JSON.
    pub manifest: String,
    /// Directory that manifest and carousel image paths are relative to.
    pub asset_root: String,
    pub carousel: CarouselConfig,
    pub gallery: GalleryConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            manifest: "static/data/picabench-results.json".to_string(),
            asset_root: ".".to_string(),
            carousel: CarouselConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be non-zero".into(),
            ));
        }
        if self.gallery.flip_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "gallery.flip_interval_ms must be non-zero".into(),
            ));
        }
        if self.gallery.max_cards == 0 {
            return Err(ConfigError::Validation(
                "gallery.max_cards must be at least 1".into(),
            ));
        }
        if self.manifest.is_empty() {
            return Err(ConfigError::Validation("manifest must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Comparison grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Period of the synchronized input/output flip in auto mode.
    pub flip_interval_ms: u64,
    /// Maximum number of cards rendered for a case.
    pub max_cards: usize,
    /// Method id prefixes (case-insensitive) that never become cards.
    pub excluded_prefixes: Vec<String>,
    /// Display mode selected when the gallery starts.
    pub initial_mode: Mode,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            flip_interval_ms: 1200,
            max_cards: 8,
            excluded_prefixes: vec!["005".to_string()],
            initial_mode: Mode::Auto,
        }
    }
}

impl GalleryConfig {
    pub fn flip_interval(&self) -> Duration {
        Duration::from_millis(self.flip_interval_ms)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ShowcaseConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ShowcaseConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ShowcaseConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `showcase.toml` file.
///
/// A missing file yields the validated stock defaults.
pub fn load_config(path: &Path) -> Result<ShowcaseConfig, ConfigError> {
    if !path.exists() {
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `showcase.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# PICABench Showcase Configuration
# ================================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Results manifest consumed by the comparison gallery.
manifest = "static/data/picabench-results.json"

# Directory that image paths in the manifest and carousel are relative to.
asset_root = "."

# ---------------------------------------------------------------------------
# Example carousel
# ---------------------------------------------------------------------------
[carousel]
# Milliseconds between automatic advances.
interval_ms = 2000

# ---------------------------------------------------------------------------
# Comparison gallery
# ---------------------------------------------------------------------------
[gallery]
# Milliseconds between input/output flips in auto mode.
flip_interval_ms = 1200

# Maximum cards rendered for one case.
max_cards = 8

# Method ids starting with any of these (case-insensitive) are hidden.
excluded_prefixes = ["005"]

# Display mode on load: "auto" flips all cards on a timer,
# "interactive" reveals outputs on hover or keyboard focus.
initial_mode = "auto"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_published_page() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.carousel.interval(), Duration::from_millis(2000));
        assert_eq!(config.gallery.flip_interval(), Duration::from_millis(1200));
        assert_eq!(config.gallery.max_cards, 8);
        assert_eq!(config.gallery.excluded_prefixes, vec!["005".to_string()]);
        assert_eq!(config.gallery.initial_mode, Mode::Auto);
        assert_eq!(config.manifest, "static/data/picabench-results.json");
    }

    #[test]
    fn parse_partial_config() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
[gallery]
initial_mode = "interactive"
"#,
        )
        .unwrap();
        assert_eq!(config.gallery.initial_mode, Mode::Interactive);
        assert_eq!(config.gallery.max_cards, 8);
        assert_eq!(config.carousel.interval_ms, 2000);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<ShowcaseConfig, _> = toml::from_str("[gallery]\nflip_ms = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        let result: Result<ShowcaseConfig, _> = toml::from_str("[gallery]\ninitial_mode = \"slideshow\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_zero_intervals_and_cards() {
        let mut config = ShowcaseConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = ShowcaseConfig::default();
        config.gallery.flip_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = ShowcaseConfig::default();
        config.gallery.max_cards = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_overrides_nested_keys_only() {
        let overlay: toml::Value = toml::from_str("[gallery]\nmax_cards = 4\n").unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        let config: ShowcaseConfig = merged.try_into().unwrap();
        assert_eq!(config.gallery.max_cards, 4);
        assert_eq!(config.gallery.flip_interval_ms, 1200);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("showcase.toml")).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("showcase.toml");
        fs::write(
            &path,
            r#"
manifest = "data/results.json"

[carousel]
interval_ms = 3500
"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.manifest, "data/results.json");
        assert_eq!(config.carousel.interval_ms, 3500);
        assert_eq!(config.gallery.max_cards, 8);
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("showcase.toml");
        fs::write(&path, "[gallery]\nmax_cards = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_reports_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("showcase.toml");
        fs::write(&path, "[gallery\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: ShowcaseConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }
}
