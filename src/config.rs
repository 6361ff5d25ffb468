//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_CACHE_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cache_key")]
    pub cache_key: String,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

fn default_cache_key() -> String {
    DEFAULT_CACHE_KEY.to_string()
}

#[cfg(feature = "native")]
fn default_cache_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("subscription-manager").to_string_lossy().to_string())
        .unwrap_or_else(|| "./subscription_manager_data".to_string())
}

#[cfg(not(feature = "native"))]
fn default_cache_dir() -> String {
    "./subscription_manager_data".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_key: default_cache_key(),
            cache_dir: default_cache_dir(),
        }
    }
}

/// Login gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u64,

    #[serde(default = "default_company")]
    pub company: String,
}

fn default_latency() -> u64 {
    1000 // 1 second
}

fn default_company() -> String {
    "Demo Company".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency(),
            company: default_company(),
        }
    }
}

/// Toast timing
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_success_timeout")]
    pub success_timeout_ms: u32,

    #[serde(default = "default_error_timeout")]
    pub error_timeout_ms: u32,
}

fn default_success_timeout() -> u32 {
    3000
}

fn default_error_timeout() -> u32 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: default_success_timeout(),
            error_timeout_ms: default_error_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment, logging the outcome
    pub fn load_default() -> Self {
        let (config, report) = Self::load_reported();
        report.log();
        config
    }

    /// Load from default locations without logging. The report can be
    /// logged once a subscriber is installed.
    pub fn load_reported() -> (Self, LoadReport) {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first of `paths` that exists and parses, with environment
    /// overrides. Falls back to environment-only config.
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.rejected.push(e),
            }
        }

        (Self::from_env(), report)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        #[cfg(feature = "native")]
        paths.extend(dirs::config_dir().map(|d| d.join("subscription-manager").join("config.toml")));
        paths.push(PathBuf::from("./config.toml"));
        paths
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Session overrides
        if let Ok(key) = std::env::var("SUBSCRIPTION_MANAGER_CACHE_KEY") {
            self.session.cache_key = key;
        }
        if let Ok(dir) = std::env::var("SUBSCRIPTION_MANAGER_CACHE_DIR") {
            self.session.cache_dir = dir;
        }

        // Auth overrides
        if let Ok(latency) = std::env::var("SUBSCRIPTION_MANAGER_LOGIN_LATENCY_MS") {
            if let Ok(ms) = latency.parse() {
                self.auth.simulated_latency_ms = ms;
            }
        }
        if let Ok(company) = std::env::var("SUBSCRIPTION_MANAGER_COMPANY") {
            self.auth.company = company;
        }

        // Notification overrides
        if let Ok(timeout) = std::env::var("SUBSCRIPTION_MANAGER_SUCCESS_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.notifications.success_timeout_ms = ms;
            }
        }
        if let Ok(timeout) = std::env::var("SUBSCRIPTION_MANAGER_ERROR_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.notifications.error_timeout_ms = ms;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("SUBSCRIPTION_MANAGER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SUBSCRIPTION_MANAGER_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(file) = std::env::var("SUBSCRIPTION_MANAGER_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

/// Outcome of searching the default config locations
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Candidate files that existed but failed to load
    pub rejected: Vec<ConfigError>,
}

impl LoadReport {
    pub fn log(&self) {
        for error in &self.rejected {
            tracing::warn!("{}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Subscription Manager Configuration
#
# Environment variables override these settings:
# - SUBSCRIPTION_MANAGER_CACHE_KEY
# - SUBSCRIPTION_MANAGER_CACHE_DIR
# - SUBSCRIPTION_MANAGER_LOGIN_LATENCY_MS
# - SUBSCRIPTION_MANAGER_COMPANY
# - SUBSCRIPTION_MANAGER_SUCCESS_TIMEOUT_MS
# - SUBSCRIPTION_MANAGER_ERROR_TIMEOUT_MS
# - SUBSCRIPTION_MANAGER_LOG_LEVEL
# - SUBSCRIPTION_MANAGER_LOG_FORMAT
# - SUBSCRIPTION_MANAGER_LOG_FILE

[session]
# Key the logged-in user is cached under
cache_key = "dashboardUser"

# Directory for the native session cache (default: platform data dir)
# cache_dir = "/var/lib/subscription-manager"

[auth]
# Artificial delay before a login outcome is reported (ms)
simulated_latency_ms = 1000

# Company attached to every demo identity
company = "Demo Company"

[notifications]
# How long confirmations stay on screen (ms)
success_timeout_ms = 3000

# How long failures stay on screen (ms)
error_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/subscription-manager.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.cache_key, "dashboardUser");
        assert_eq!(config.auth.simulated_latency_ms, 1000);
        assert_eq!(config.auth.company, "Demo Company");
        assert_eq!(config.notifications.success_timeout_ms, 3000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.session.cache_key, "dashboardUser");
        assert_eq!(config.notifications.error_timeout_ms, 5000);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\nsimulated_latency_ms = 10").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.auth.simulated_latency_ms, 10);
        assert_eq!(config.auth.company, "Demo Company");
        assert_eq!(config.session.cache_key, "dashboardUser");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth\nbroken").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_override() {
        let vars = [
            ("SUBSCRIPTION_MANAGER_CACHE_KEY", "envUser"),
            ("SUBSCRIPTION_MANAGER_COMPANY", "Env Corp"),
            ("SUBSCRIPTION_MANAGER_SUCCESS_TIMEOUT_MS", "1500"),
            ("SUBSCRIPTION_MANAGER_ERROR_TIMEOUT_MS", "not-a-number"),
            ("SUBSCRIPTION_MANAGER_LOG_FILE", "/tmp/subscription-manager.log"),
        ];
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        let config = Config::from_env();
        for (name, _) in vars {
            std::env::remove_var(name);
        }

        assert_eq!(config.session.cache_key, "envUser");
        assert_eq!(config.auth.company, "Env Corp");
        assert_eq!(config.notifications.success_timeout_ms, 1500);
        // Unparseable numbers keep the default
        assert_eq!(config.notifications.error_timeout_ms, 5000);
        assert_eq!(
            config.logging.file.as_deref(),
            Some("/tmp/subscription-manager.log")
        );
    }

    #[test]
    fn test_load_first_reports_rejected_files() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[auth\nbroken").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[auth]\nsimulated_latency_ms = 42").unwrap();

        let paths = [
            PathBuf::from("/definitely/not/here.toml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let (config, report) = Config::load_first(&paths);

        assert_eq!(config.auth.simulated_latency_ms, 42);
        assert_eq!(report.source.as_deref(), Some(good.path()));
        assert_eq!(report.rejected.len(), 1);
        assert!(matches!(report.rejected[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let (config, report) = Config::load_first(&[PathBuf::from("/definitely/not/here.toml")]);

        assert!(report.source.is_none());
        assert!(report.rejected.is_empty());
        assert_eq!(config.auth.simulated_latency_ms, 1000);
    }
}
