//! TOML configuration file.
//!
//! ```toml
//! [defaults]
//! font_size = 12
//! color = "blue"
//! use_max = true
//!
//! [styles.lint]
//! label = "lint"
//! thresholds = { 2 = "red", 4 = "orange", 8 = "yellow", 10 = "green" }
//!
//! [styles.release]
//! thresholds = ["1.0.0=red", "2.0.0=green"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anybadge_core::Thresholds;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::WidthModelChoice;
use crate::error::ConfigError;

/// Looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "anybadge.toml";
/// Subdirectory of the platform config directory.
pub const CONFIG_DIR_NAME: &str = "anybadge";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Fallbacks for flags not given on the command line.
    pub defaults: Defaults,

    /// Named styles, usable like the built-in `pylint` and `coverage`.
    pub styles: BTreeMap<String, StyleConfig>,
}

/// Default badge settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub font: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<f64>,
    pub label_padding: Option<f64>,
    pub value_padding: Option<f64>,
    /// "default" or "gitlab-scoped".
    pub style: Option<String>,
    pub template: Option<String>,
    pub use_max: Option<bool>,
    pub width_model: Option<WidthModelChoice>,
}

/// A user-defined style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub thresholds: ThresholdSpec,
    pub label: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Thresholds as a `key = color` table or a list of `"key=color"` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdSpec {
    Table(BTreeMap<String, String>),
    List(Vec<String>),
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        ThresholdSpec::List(Vec::new())
    }
}

impl ThresholdSpec {
    pub fn to_thresholds(&self) -> anybadge_core::Result<Thresholds> {
        match self {
            ThresholdSpec::Table(table) => Ok(table.iter().collect()),
            ThresholdSpec::List(pairs) => Thresholds::from_pairs(pairs),
        }
    }
}

impl UserConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Find and load the configuration file.
///
/// An explicit path must exist. Otherwise `./anybadge.toml` is tried, then
/// `<config dir>/anybadge/config.toml`; finding neither is not an error.
pub fn discover(explicit: Option<&Path>) -> Result<Option<UserConfig>, ConfigError> {
    let user_file = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    discover_in(explicit, Path::new("."), user_file)
}

pub(crate) fn discover_in(
    explicit: Option<&Path>,
    cwd: &Path,
    user_file: Option<PathBuf>,
) -> Result<Option<UserConfig>, ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "loading config file");
        return UserConfig::from_file(path).map(Some);
    }

    let candidates = std::iter::once(cwd.join(LOCAL_CONFIG_FILE)).chain(user_file);
    for path in candidates {
        if path.is_file() {
            debug!(path = %path.display(), "loading config file");
            return UserConfig::from_file(&path).map(Some);
        }
    }
    debug!("no config file found");
    Ok(None)
}
