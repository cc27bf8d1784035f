// Settings module
// Connection and appearance preferences, persisted as TOML

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn all() -> [ThemePreference; 3] {
        [Self::Light, Self::Dark, Self::System]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "Follow system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the meal API; endpoint paths are appended to it.
    pub api_base_url: String,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    pub theme: ThemePreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            theme: ThemePreference::System,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("API base URL must start with http:// or https://".to_string());
        }

        if self.request_timeout_secs == Some(0) {
            return Err("Request timeout must be greater than 0 seconds".to_string());
        }

        Ok(())
    }

    /// Base URL with surrounding whitespace and trailing slashes removed.
    pub fn normalized_base_url(&self) -> String {
        self.api_base_url.trim().trim_end_matches('/').to_string()
    }

    /// Whether both settings send requests to the same backend.
    pub fn same_backend(&self, other: &Settings) -> bool {
        self.normalized_base_url() == other.normalized_base_url()
    }
}
