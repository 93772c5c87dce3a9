use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_STORAGE_FILE: &str = "zyntro-storage.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Workspace file read by the file-backed providers.
    #[serde(default)]
    pub workspace_file: Option<PathBuf>,
    /// Key-value file holding the persisted active project.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub actor_id: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/zyntro/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("zyntro/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("zyntro\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    return Self::parse(&content);
                }
            }
        }
        Self::default()
    }

    /// Parse a TOML document, falling back to defaults when it is invalid.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn effective_storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|data| data.join("zyntro").join("storage.json"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE))
    }
}
