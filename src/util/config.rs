use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Page size of the browse list.
    #[serde(default = "default_browse_per_page")]
    pub browse_per_page: u32,
    /// Page size of the language walk, which traverses every repository.
    #[serde(default = "default_language_walk_per_page")]
    pub language_walk_per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How close to the end of the list the cursor must be before the
    /// next page is requested.
    #[serde(default = "default_load_more_margin")]
    pub load_more_margin: usize,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_browse_per_page() -> u32 {
    crate::github::client::BROWSE_PAGE_SIZE
}
fn default_language_walk_per_page() -> u32 {
    crate::github::client::LANGUAGE_WALK_PAGE_SIZE
}
fn default_load_more_margin() -> usize {
    3
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            browse_per_page: default_browse_per_page(),
            language_walk_per_page: default_language_walk_per_page(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            load_more_margin: default_load_more_margin(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: AppConfig =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            return Ok(config);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/repolens/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/repolens/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        //    (macOS: ~/Library/Application Support/repolens/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "repolens") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path).with_context(|| {
                    format!("Failed to read config file: {}", config_path.display())
                })?;
                let config: AppConfig =
                    toml::from_str(&content).with_context(|| "Failed to parse config file")?;
                return Ok(config);
            }
        }

        // Fallback to default
        Ok(AppConfig::default())
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "repolens") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/repolens/logs")
    }
}
