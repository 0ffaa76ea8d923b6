//! Widget defaults
//!
//! Applications can keep house-style animation settings in a TOML file
//! instead of repeating them on every widget:
//!
//! ```toml
//! [rolling_number]
//! duration = "750ms"
//! easing = "ease-out-cubic"     # preset name or any CSS timing function
//! minimum_digits = 3
//! ```
//!
//! A default only applies where the widget's own parameter is unset.

use std::fs;
use std::path::Path;

use roller_animation::{Easing, TransitionDuration};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WidgetError};

/// File name looked up by [`WidgetConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "roller.toml";

/// Top-level configuration file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub rolling_number: RollingNumberDefaults,
}

/// Defaults for every `RollingNumber`
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RollingNumberDefaults {
    #[serde(default)]
    pub duration: Option<TransitionDuration>,
    /// Preset name (`ease-in-out-back`) or a custom timing function
    #[serde(default)]
    pub easing: Option<String>,
    #[serde(default)]
    pub minimum_digits: Option<i32>,
}

impl RollingNumberDefaults {
    /// The configured easing with preset names resolved
    pub fn easing(&self) -> Option<Easing> {
        self.easing.as_deref().map(Easing::resolve)
    }
}

impl WidgetConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| WidgetError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Load `roller.toml` from a directory, falling back to defaults when
    /// the file does not exist
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!(dir = %dir.display(), "no widget config, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}
