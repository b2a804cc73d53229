use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::source::giphy::DEFAULT_ENDPOINT;

/// Environment variable holding the Giphy API key. Wins over `api.key`.
pub const API_KEY_ENV: &str = "GIPHY_API_KEY";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub api: ApiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Fallback key when the environment does not provide one
    pub key: Option<String>,
    /// Client-side request timeout in seconds
    pub timeout_secs: u64,
}

/// Fixed terms sent with every search
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Words appended to the user's text (e.g. "car automobile")
    pub qualifiers: Vec<String>,
    pub limit: u32,
    pub offset: u32,
    /// Content rating filter ("g" = general audience)
    pub rating: String,
    /// Locale hint
    pub lang: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            key: None,
            timeout_secs: 15,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            qualifiers: vec!["car".to_string(), "automobile".to_string()],
            limit: 15,
            offset: 0,
            rating: "g".to_string(),
            lang: "vi".to_string(),
        }
    }
}

impl ApiConfig {
    /// Request timeout. Zero would fail every search instantly, so it falls back to the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            let fallback = ApiConfig::default().timeout_secs;
            tracing::warn!("api.timeout_secs = 0 is not usable, using {}s", fallback);
            return Duration::from_secs(fallback);
        }
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the API key from the environment, then the config file.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.key.as_deref())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(|| {
            from_file
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
}

pub fn load_from(path: &Path) -> Config {
    load_path(path)
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_path(&path),
        None => {
            tracing::warn!("Could not determine home directory, using default config");
            Config::default()
        }
    }
}

fn load_path(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, not the OS-specific app support dir
    dirs::home_dir().map(|home| home.join(".config").join("carlens").join("config.toml"))
}
