// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; missing values fall back to the
//! constants in [`defaults`]. Feature toggles (zoom, toolbar, preload) are
//! configuration here rather than divergent code paths.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Disables non-essential eased motion (modal fade). Functional state
    /// transitions are unaffected.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    /// Whether zoom gestures, shortcuts, and the toolbar are available.
    #[serde(default)]
    pub zoom_enabled: Option<bool>,
    /// Whether the zoom toolbar is shown inside the modal.
    #[serde(default)]
    pub show_toolbar: Option<bool>,
    /// Whether neighbor images are preloaded in the background.
    #[serde(default)]
    pub preload_enabled: Option<bool>,
    /// Multiplicative zoom step per wheel tick or toolbar press.
    #[serde(default)]
    pub wheel_zoom_factor: Option<f32>,
    /// Minimum horizontal swipe travel, in pixels, to trigger navigation.
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            reduced_motion: Some(false),
            zoom_enabled: Some(true),
            show_toolbar: Some(true),
            preload_enabled: Some(true),
            wheel_zoom_factor: Some(DEFAULT_WHEEL_ZOOM_FACTOR),
            swipe_threshold: Some(DEFAULT_SWIPE_NAV_THRESHOLD),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
