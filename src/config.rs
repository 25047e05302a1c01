use serde::Deserialize;
use std::path::Path;
use url::Url;

pub const CONFIG_FILE: &str = "folio.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Vertical scroll offset past which the navbar is marked `scrolled`.
    pub scroll_threshold: f64,
    /// Filter tokens for the host document's filter buttons.
    pub filters: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            scroll_threshold: 50.0,
            filters: ["all", "branding", "print", "digital"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load `path`, falling back to defaults for a missing or malformed file.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(_) => {
                log::info!("No {} found, using defaults", path.display());
                return Config::default();
            }
        };
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        match toml::from_str::<Config>(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Invalid config, using defaults: {}", e);
                Config::default()
            }
        }
    }

    /// The API base URL, or the default when the configured one does not parse.
    pub fn base_url(&self) -> Option<Url> {
        match Url::parse(&self.api.base_url) {
            Ok(u) => Some(u),
            Err(e) => {
                log::warn!(
                    "Invalid api.base_url '{}' ({}), using {}",
                    self.api.base_url,
                    e,
                    DEFAULT_BASE_URL
                );
                Url::parse(DEFAULT_BASE_URL).ok()
            }
        }
    }
}
