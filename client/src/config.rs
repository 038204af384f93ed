//! Native configuration.
//!
//! Read from the environment (after loading `.env` when present):
//!
//! - `CARTEL_API_URL` - API base URL, default [`DEFAULT_API_URL`]
//! - `CARTEL_SESSION_FILE` - session file, default [`DEFAULT_SESSION_FILE`]

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_FILE: &str = ".cartel/session.json";

pub const API_URL_VAR: &str = "CARTEL_API_URL";
pub const SESSION_FILE_VAR: &str = "CARTEL_SESSION_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl Config {
    /// Load `.env`, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Config::default();
        if let Some(url) = get(API_URL_VAR) {
            config.api_url = validate_api_url(API_URL_VAR, &url)?;
        }
        if let Some(path) = get(SESSION_FILE_VAR) {
            config.session_file = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_url {
            self.api_url = validate_api_url("--api-url", &url)?;
        }
        if let Some(path) = session_file {
            self.session_file = path;
        }
        Ok(self)
    }
}

fn validate_api_url(name: &'static str, url: &str) -> Result<String, ConfigError> {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidVar {
            name,
            message: format!("expected an http(s) URL, got '{}'", url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_env_values_and_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_VAR, "https://expo.example.org/api/"),
            (SESSION_FILE_VAR, "/tmp/s.json"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://expo.example.org/api");
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));

        let config = config
            .with_overrides(Some("http://127.0.0.1:9000/api".into()), None)
            .unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_invalid_url() {
        let err = Config::from_lookup(lookup(&[(API_URL_VAR, "localhost:5000")])).unwrap_err();
        assert!(err.to_string().contains(API_URL_VAR));

        let err = Config::default()
            .with_overrides(Some("ftp://x".into()), None)
            .unwrap_err();
        assert!(err.to_string().contains("--api-url"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(API_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
