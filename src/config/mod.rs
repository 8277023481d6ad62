//! Configuration Module
//! Dashboard settings with an optional JSON override file and env override for the dataset path.

pub mod consts;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Settings for the dashboard window and its data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV file the price list is loaded from.
    pub dataset_path: PathBuf,
    /// File name suggested by the download dialog.
    pub export_file_name: String,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(consts::DEFAULT_DATASET),
            export_file_name: consts::DEFAULT_EXPORT_NAME.to_string(),
            window_title: "Lista de Precios de Productos en Miami".to_string(),
            window_size: [1400.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Load settings from `path` if it exists, otherwise use defaults.
    /// The dataset env variable wins over both.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            info!("loaded config from {}", path.display());
            config
        } else {
            debug!("no config at {}, using defaults", path.display());
            Self::default()
        };

        if let Ok(dataset) = std::env::var(consts::DATASET_ENV) {
            if !dataset.trim().is_empty() {
                info!("dataset path overridden by {}", consts::DATASET_ENV);
                config.dataset_path = PathBuf::from(dataset);
            }
        }

        Ok(config)
    }
}
