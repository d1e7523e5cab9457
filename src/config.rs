//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `danlann.toml`. The config names
//! the gallery and lists the album files to interpret, in order:
//!
//! ```toml
//! title = "Memory Jail"               # required
//! description = "Photos since 2004"   # optional
//! albums = [                          # required, relative to this file
//!     "albums/travel.txt",
//!     "albums/family.txt",
//! ]
//! ```
//!
//! ## Layering
//!
//! Stock defaults are serialized to a TOML table, the user's file is merged
//! on top with [`merge_toml`], and command-line overrides
//! ([`ConfigOverrides`]) are merged last. The result is deserialized and
//! validated. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
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

/// Gallery configuration loaded from `danlann.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Gallery title, shown on the index page.
    pub title: String,
    /// Gallery description.
    pub description: String,
    /// Album files, interpreted in this order.
    pub albums: Vec<String>,
}

impl GalleryConfig {
    /// Validate that the gallery can be built from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "no gallery title configured".into(),
            ));
        }
        if self.albums.is_empty() {
            return Err(ConfigError::Validation(
                "no input album files configured".into(),
            ));
        }
        Ok(())
    }

    /// Album file paths, resolved against the directory holding the config.
    pub fn album_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.albums.iter().map(|a| base_dir.join(a)).collect()
    }
}

/// Values given on the command line, layered over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ConfigOverrides {
    /// Sparse TOML table holding only the values that were set.
    pub fn to_toml(&self) -> toml::Value {
        let mut table = toml::map::Map::new();
        if let Some(title) = &self.title {
            table.insert("title".into(), toml::Value::String(title.clone()));
        }
        if let Some(description) = &self.description {
            table.insert(
                "description".into(),
                toml::Value::String(description.clone()),
            );
        }
        toml::Value::Table(table)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
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

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(value)
}

/// Merge overlays onto a base value in order, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `danlann.toml` from the given path.
///
/// Unlike optional per-directory config, the gallery config must exist:
/// without it there are no album files to read.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    load_config_with(path, &ConfigOverrides::default())
}

/// Load `danlann.toml` and apply command-line overrides on top.
pub fn load_config_with(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let user = load_raw_config(path)?;
    resolve_config(base, [user, overrides.to_toml()])
}

/// Returns a fully-commented stock `danlann.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Danlann Configuration
# ======================
# Unknown keys will cause an error.

# Gallery title (required).
title = "My Gallery"

# Gallery description (optional).
description = ""

# Album description files, interpreted in this order (required).
# Paths are relative to this file. An album may be referenced in one
# file and defined in a later one.
#
# Album file syntax, one statement per line:
#   /dir; title[; description]     album definition
#   /dir                           subalbum of the album defined above
#   name[; title[; description]]   photo of the album defined above
#   # comment
albums = [
    "albums.txt",
]
"##
}
