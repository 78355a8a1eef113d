use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use gastos_storage::DEFAULT_RECORDS_KEY;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub storage_key: String,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let database_path = project_dirs()
            .map(|dirs| dirs.data_dir().join("gastos.db"))
            .unwrap_or_else(|| PathBuf::from("gastos.db"));
        Self {
            database_path,
            storage_key: DEFAULT_RECORDS_KEY.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads `explicit` if given, else the per-user config file if present,
    /// else falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "gastos", "Gastos")
}

fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}
