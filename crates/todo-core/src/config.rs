use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "@todos_key";
const DATA_FILE_NAME: &str = "todos.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON key-value file holding the persisted snapshot
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Key the list snapshot is stored under
    #[serde(default)]
    pub storage_key: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
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
                    return Self::from_toml(&content);
                }
            }
        }
        Self::default()
    }

    /// Parse config text, falling back to defaults when it is invalid.
    pub fn from_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("todo").join(DATA_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
        })
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_storage_key(), "@todos_key");
        assert!(config.effective_data_file().ends_with("todos.json"));
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = AppConfig::from_toml(
            r#"
            data_file = "/tmp/my-todos.json"
            storage_key = "work"
            "#,
        );
        assert_eq!(config.effective_storage_key(), "work");
        assert_eq!(
            config.effective_data_file(),
            PathBuf::from("/tmp/my-todos.json")
        );
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml("data_file = [");
        assert!(config.data_file.is_none());
        assert_eq!(config.effective_storage_key(), DEFAULT_STORAGE_KEY);
    }
}
