use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/grove.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroveConfig {
    /// Placement table to execute. The built-in grove is used when unset.
    pub placements: Option<PathBuf>,
    /// Prefix of the nodes created in the headless scene.
    pub node_prefix: String,
    /// Number of nodes created in the headless scene.
    pub node_count: usize,
    /// Delay between modification checks while watching.
    pub poll_interval_ms: u64,
}

impl Default for GroveConfig {
    fn default() -> Self {
        Self {
            placements: None,
            node_prefix: grove_placement::DEFAULT_NODE_PREFIX.to_string(),
            node_count: 10,
            poll_interval_ms: 500,
        }
    }
}

impl GroveConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<GroveConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    GroveConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else if path != Path::new(DEFAULT_CONFIG_PATH) {
                    warn!("Config not found at {}. Using defaults", path.display());
                }
                GroveConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
