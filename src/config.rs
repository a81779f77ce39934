//! Store configuration.
//!
//! This module handles loading and saving the store configuration, which
//! includes the storage namespace and the last email used to sign in (a
//! convenience for hosts that pre-fill login forms).
//!
//! Configuration is stored at `<config dir>/pagepilot/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

/// Application name used for config/data directory paths
const APP_NAME: &str = "pagepilot";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Storage key prefix when none is configured
const DEFAULT_NAMESPACE: &str = "pagepilot";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    pub namespace: Option<String>,
    pub last_email: Option<String>,
}

impl StoreConfig {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Directory the account files live in, scoped by namespace so separate
    /// profiles never share state.
    pub fn data_dir(&self) -> Result<PathBuf, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(data_dir.join(APP_NAME).join(self.namespace()))
    }
}
