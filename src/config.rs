//! Layered dashboard configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file
//! (`moonitor.toml` in the working directory, or the path given with
//! `--config`), then `MOONITOR_*` environment variables. Command-line flags
//! are applied on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the Moonitor web server.
    pub api_url: String,
    /// Seconds between automatic refreshes of stats and messages.
    pub refresh_secs: u64,
    /// Messages per table page.
    pub per_page: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Where tracing output is written.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            refresh_secs: 30,
            per_page: crate::api::DEFAULT_PER_PAGE,
            request_timeout_secs: 10,
            log_file: PathBuf::from("moonitor.log"),
        }
    }
}

impl Settings {
    /// Load settings from the default file location and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name("moonitor").required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("MOONITOR").try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            bail!("refresh_secs must be at least 1");
        }
        if self.per_page == 0 {
            bail!("per_page must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.refresh_interval(), Duration::from_secs(30));
        assert_eq!(settings.per_page, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_keeps_unset_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moonitor.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_url = \"http://dashboard.internal:8080\"").unwrap();
        writeln!(file, "refresh_secs = 5").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.api_url, "http://dashboard.internal:8080");
        assert_eq!(settings.refresh_secs, 5);
        assert_eq!(settings.per_page, 20);
        assert_eq!(settings.log_file, PathBuf::from("moonitor.log"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_refresh_is_rejected() {
        let settings = Settings {
            refresh_secs: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
