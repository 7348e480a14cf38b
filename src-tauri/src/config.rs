use crate::error::AppError;
use log::LevelFilter;
use std::str::FromStr;

const DEV_URL_VAR: &str = "PDF_SHELF_DEV_URL";
const LOG_VAR: &str = "PDF_SHELF_LOG";

/// Startup settings. Nothing here is persisted; values come from the
/// environment and the build profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Load the webview from the dev server instead of bundled assets.
    pub dev_mode: bool,
    pub dev_url: String,
    pub window_width: u32,
    pub window_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
            dev_url: "http://localhost:5173".to_string(),
            window_width: 1200,
            window_height: 800,
            min_width: 800,
            min_height: 600,
            log_level: LevelFilter::Info,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if lookup("NODE_ENV").as_deref() == Some("development") {
            config.dev_mode = true;
        }

        if let Some(raw) = lookup(DEV_URL_VAR) {
            let parsed = url::Url::parse(raw.trim())
                .map_err(|e| AppError::InvalidConfig(format!("{}={:?}: {}", DEV_URL_VAR, raw, e)))?;
            config.dev_url = parsed.to_string();
        }

        if let Some(raw) = lookup(LOG_VAR) {
            config.log_level = LevelFilter::from_str(raw.trim())
                .map_err(|_| AppError::InvalidConfig(format!("{}={:?} is not a log level", LOG_VAR, raw)))?;
        }

        Ok(config)
    }

    pub fn dev_url(&self) -> anyhow::Result<url::Url> {
        Ok(url::Url::parse(&self.dev_url)?)
    }
}
