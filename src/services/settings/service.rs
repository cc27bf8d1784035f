use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "MEAL_ADMIN_API_URL";

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory, falling back to the
    /// working directory when the platform reports no home.
    pub fn for_current_user() -> Self {
        let path = ProjectDirs::from("com", "MealAdmin", "MealAdmin")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk. A missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unreadable or invalid.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Validate and write settings, creating the config directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {:?}", parent))?;
            }
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Apply `MEAL_ADMIN_API_URL` from the process environment.
pub fn apply_env_overrides(settings: Settings) -> Settings {
    apply_api_url_override(settings, std::env::var(API_URL_ENV).ok())
}

/// Replace the base URL with `api_url`. Blank or invalid overrides are ignored
/// and the configured URL is kept.
pub fn apply_api_url_override(settings: Settings, api_url: Option<String>) -> Settings {
    let Some(url) = api_url.filter(|url| !url.trim().is_empty()) else {
        return settings;
    };

    let overridden = Settings {
        api_base_url: url,
        ..settings.clone()
    };
    match overridden.validate() {
        Ok(()) => {
            log::info!(
                "Using API base URL from {}: {}",
                API_URL_ENV,
                overridden.api_base_url
            );
            overridden
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}='{}': {}; using {}",
                API_URL_ENV,
                overridden.api_base_url,
                e,
                settings.api_base_url
            );
            settings
        }
    }
}
