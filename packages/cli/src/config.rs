use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_document::Language;
use storefront_editor::FileStore;

pub const DEFAULT_CONFIG_NAME: &str = "storefront.config.json";

/// Storefront configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one JSON document per site
    #[serde(default = "default_sites_dir")]
    pub sites_dir: String,

    /// Language used when a command is not given one
    #[serde(default)]
    pub default_language: Language,

    /// Preset forced on every site, replacing the document's own preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_override: Option<String>,

    /// Visitor dark-mode preference; unset means the site default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

fn default_sites_dir() -> String {
    "sites".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|err| anyhow::anyhow!("Invalid {}: {}", DEFAULT_CONFIG_NAME, err))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, cwd: &str) -> anyhow::Result<PathBuf> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(&config_path, json)?;
        Ok(config_path)
    }

    /// Get absolute path to the sites directory
    pub fn get_sites_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.sites_dir)
    }

    pub fn store(&self, cwd: &str) -> FileStore {
        FileStore::new(self.get_sites_dir(cwd))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites_dir: default_sites_dir(),
            default_language: Language::default(),
            theme_override: None,
            dark_mode: None,
        }
    }
}
