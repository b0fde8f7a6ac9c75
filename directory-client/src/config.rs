//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: STAFFDIR_, nested keys split on `__`)
//! 2. Current working directory: ./staffdir.toml
//! 3. XDG config directory: ~/.config/staffdir/config.toml
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const ENV_PREFIX: &str = "STAFFDIR_";
const LOCAL_CONFIG_FILE: &str = "staffdir.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Card formatting
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address the `/api/employees` routes are served under
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; requests wait indefinitely when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Locale settings used when rendering cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix placed before formatted salaries
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// chrono format string for hire dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (pretty, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl ApiConfig {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl DirectoryConfig {
    /// Load configuration from all sources
    ///
    /// Environment variables (STAFFDIR_ prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(DirectoryConfig::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::debug!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(DirectoryConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Candidate config files, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("staffdir");
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point the XDG lookup inside the jail so the host config never leaks in
    fn isolate_xdg(jail: &mut Jail) -> PathBuf {
        let home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", home.display());
        jail.set_env("XDG_CONFIG_DIRS", jail.directory().join("xdg-system").display());
        home
    }

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.api.timeout().is_none());
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[api]
base_url = "http://directory.internal:9000"
timeout_secs = 15

[display]
currency_symbol = "€"
"#,
            )?;

            let config = DirectoryConfig::load_from("custom.toml").unwrap();
            assert_eq!(config.api.base_url, "http://directory.internal:9000");
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
            assert_eq!(config.display.currency_symbol, "€");
            // untouched sections keep defaults
            assert_eq!(config.display.date_format, "%-m/%-d/%Y");
            assert_eq!(config.logging.format, "pretty");
            Ok(())
        });
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        Jail::expect_with(|_| {
            let config = DirectoryConfig::load_from("absent.toml").unwrap();
            assert_eq!(config.display, DisplayConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[api]
base_url = "http://file:1"

[display]
currency_symbol = "£"
"#,
            )?;
            jail.set_env("STAFFDIR_API__BASE_URL", "http://env:2");
            jail.set_env("STAFFDIR_API__TIMEOUT_SECS", "3");
            // env values are trimmed; a spaced prefix has to come from a file
            jail.set_env("STAFFDIR_DISPLAY__CURRENCY_SYMBOL", "EUR ");

            let config = DirectoryConfig::load_from("custom.toml").unwrap();
            assert_eq!(config.api.base_url, "http://env:2");
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(3)));
            assert_eq!(config.display.currency_symbol, "EUR");
            Ok(())
        });
    }

    #[test]
    fn test_load_reads_working_directory_file() {
        Jail::expect_with(|jail| {
            isolate_xdg(jail);
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[api]
base_url = "http://local:7000"

[logging]
format = "json"
"#,
            )?;

            let config = DirectoryConfig::load().unwrap();
            assert_eq!(config.api.base_url, "http://local:7000");
            assert_eq!(config.logging.format, "json");
            assert_eq!(config.display, DisplayConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_search_order() {
        Jail::expect_with(|jail| {
            let home = isolate_xdg(jail);
            std::fs::create_dir_all(home.join("staffdir")).unwrap();
            std::fs::write(
                home.join("staffdir").join("config.toml"),
                r#"
[api]
base_url = "http://xdg:6000"
timeout_secs = 30

[display]
currency_symbol = "€"
"#,
            )
            .unwrap();

            // XDG alone
            let config = DirectoryConfig::load().unwrap();
            assert_eq!(config.api.base_url, "http://xdg:6000");
            assert_eq!(config.display.currency_symbol, "€");

            // working directory beats XDG, key by key
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[api]
base_url = "http://local:7000"
"#,
            )?;
            let config = DirectoryConfig::load().unwrap();
            assert_eq!(config.api.base_url, "http://local:7000");
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(30)));
            assert_eq!(config.display.currency_symbol, "€");

            // env beats both
            jail.set_env("STAFFDIR_API__BASE_URL", "http://env:8000");
            let config = DirectoryConfig::load().unwrap();
            assert_eq!(config.api.base_url, "http://env:8000");
            assert_eq!(config.api.timeout(), Some(Duration::from_secs(30)));
            Ok(())
        });
    }
}
