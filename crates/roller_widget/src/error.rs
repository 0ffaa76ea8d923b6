//! Error types for roller_widget

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading widget configuration
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Config file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse widget config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for roller_widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
