mod service;

pub use service::{apply_api_url_override, apply_env_overrides, SettingsService, API_URL_ENV};
