//! Portal configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so values are baked in through
//! `option_env!` when the WASM artifact is compiled. Parsing lives in
//! [`PortalConfig::from_values`] so it can be tested without rebuilding.

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_STORAGE_KEY: &str = "portal_auth";
pub const DEFAULT_TOAST_TTL_MS: u32 = 4000;

/// Error returned while building a [`PortalConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The API base URL was set but empty after trimming.
    #[error("PORTAL_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
    /// The API base URL is neither absolute nor rooted at `/`.
    #[error("PORTAL_API_BASE_URL must start with http://, https:// or '/': {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the remote auth API, without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the persisted session record.
    pub storage_key: String,
    /// Default lifetime of a toast notification.
    pub toast_ttl_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl PortalConfig {
    /// Build typed config from raw values.
    ///
    /// - `base_url`: `PORTAL_API_BASE_URL`, default `/api`, trailing `/` trimmed
    /// - `toast_ttl_ms`: `PORTAL_TOAST_TTL_MS`, default 4000; unparseable or zero
    ///   values fall back to the default
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the base URL is empty or not a URL/path.
    pub fn from_values(base_url: Option<&str>, toast_ttl_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(base_url)?;
        let toast_ttl_ms = toast_ttl_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(DEFAULT_TOAST_TTL_MS);
        Ok(Self { api_base_url, storage_key: DEFAULT_STORAGE_KEY.to_owned(), toast_ttl_ms })
    }

    /// Read the values captured by the compiler from the build environment.
    ///
    /// Invalid values are logged and replaced with defaults so a misconfigured
    /// build still boots.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("PORTAL_API_BASE_URL"), option_env!("PORTAL_TOAST_TTL_MS")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid portal config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Absolute or rooted URL for an API path such as `"login"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        // A bare "/" trims to nothing and means "same origin root".
        if raw.trim() == "/" {
            return Ok(String::new());
        }
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/')) {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
