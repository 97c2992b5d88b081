use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::services::contact_book::BookSettings;
use crate::services::error_handling::RolodexError;
use tokio::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Supabase,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Which backend holds contacts and identities
    pub backend: BackendKind,

    /// Hosted project URL, e.g. https://xyz.supabase.co
    pub supabase_url: String,

    /// Public (anon) API key of the hosted project
    pub supabase_anon_key: String,

    /// Session token from a completed sign-in
    pub access_token: Option<String>,

    /// SQLite file used by the local backend
    pub database_path: PathBuf,

    /// Profile signed in on the local backend
    pub local_user_email: String,

    pub oauth_provider: String,

    /// Where the provider sends the browser after sign-in
    pub redirect_to: String,

    pub toast_duration_ms: u64,

    pub search_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Supabase,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            access_token: None,
            database_path: default_data_dir().join("rolodex.db"),
            local_user_email: "me@localhost".to_string(),
            oauth_provider: "google".to_string(),
            redirect_to: "http://localhost:3000/dashboard".to_string(),
            toast_duration_ms: 3000,
            search_debounce_ms: 180,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            let default_config = Self::default();
            default_config.save_to(path)?;
            Ok(default_config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| RolodexError::ConfigurationError {
            message: "Could not determine config directory".to_string(),
        })?;

        Ok(config_dir.join("rolodex").join("config.toml"))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROLODEX_SUPABASE_URL") {
            self.supabase_url = url;
        }
        if let Some(key) = lookup("ROLODEX_SUPABASE_ANON_KEY") {
            self.supabase_anon_key = key;
        }
        if let Some(token) = lookup("ROLODEX_ACCESS_TOKEN") {
            self.access_token = Some(token).filter(|t| !t.is_empty());
        }
        match lookup("ROLODEX_BACKEND").as_deref() {
            Some("sqlite") => self.backend = BackendKind::Sqlite,
            Some("supabase") => self.backend = BackendKind::Supabase,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<(), RolodexError> {
        if self.backend == BackendKind::Supabase {
            if self.supabase_url.trim().is_empty() {
                return Err(RolodexError::ConfigurationError {
                    message: "supabase_url is required for the supabase backend".to_string(),
                });
            }
            if self.supabase_anon_key.trim().is_empty() {
                return Err(RolodexError::ConfigurationError {
                    message: "supabase_anon_key is required for the supabase backend".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn book_settings(&self) -> BookSettings {
        BookSettings {
            toast_duration: Duration::from_millis(self.toast_duration_ms),
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rolodex"))
        .unwrap_or_else(|| PathBuf::from("."))
}
