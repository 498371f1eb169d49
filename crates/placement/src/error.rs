use std::path::PathBuf;

use grove_core::SceneError;
use thiserror::Error;

/// Errors raised while loading or applying a placement table.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Reading the table file failed.
    #[error("failed to read placement table: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON table could not be parsed.
    #[error("failed to parse placement table JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The TOML table could not be parsed.
    #[error("failed to parse placement table TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// The file extension does not name a supported format.
    #[error("unsupported placement table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// The table parsed but its contents are unusable.
    #[error("invalid placement table: {0}")]
    Invalid(String),
    /// The scene graph rejected a node operation.
    #[error(transparent)]
    Scene(#[from] SceneError),
}
