//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::services::{DEFAULT_CAPACITY, FailurePolicy};
use crate::domain::errors::ConfigError;
use crate::domain::services::DEFAULT_CDN_BASE;
use crate::infrastructure::discord::DISCORD_API_BASE;

pub(crate) const APP_NAME: &str = "stashcord";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Remote endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Discord REST API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Discord CDN base URL.
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            cdn_base_url: default_cdn_base_url(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Persist a command-line token to the keyring.
    #[serde(default)]
    pub save_token: bool,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Root folder of the downloaded tree.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum number of simultaneous requests.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// What happens to other requests when one download fails.
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Remote endpoints.
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_concurrency() -> usize {
    DEFAULT_CAPACITY
}

fn default_api_base_url() -> String {
    DISCORD_API_BASE.to_string()
}

fn default_cdn_base_url() -> String {
    DEFAULT_CDN_BASE.to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// The token is not part of the configuration and is left in `args`.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(concurrency) = args.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(policy) = args.failure_policy {
            self.failure_policy = policy;
        }
        if let Some(api_base_url) = &args.api_base_url {
            self.endpoints.api_base_url = api_base_url.clone();
        }
        if let Some(cdn_base_url) = &args.cdn_base_url {
            self.endpoints.cdn_base_url = cdn_base_url.clone();
        }
        if args.save_token {
            self.save_token = true;
        }
    }

    /// Checks values that would make a run meaningless.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be at least 1".to_string(),
            ));
        }
        for (name, url) in [
            ("api_base_url", &self.endpoints.api_base_url),
            ("cdn_base_url", &self.endpoints.cdn_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        Ok(())
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| Self::default_config_dir().map(|dir| dir.join("config.toml")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            save_token: false,
            log_path: None,
            log_level: LogLevel::Info,
            output_dir: default_output_dir(),
            concurrency: default_concurrency(),
            failure_policy: FailurePolicy::default(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            output_dir = "/srv/emoji"
            concurrency = 8
            failure_policy = "cancel-queued"

            [endpoints]
            cdn_base_url = "https://media.example"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.output_dir, PathBuf::from("/srv/emoji"));
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.failure_policy, FailurePolicy::CancelQueued);
        assert_eq!(config.endpoints.cdn_base_url, "https://media.example");
        assert_eq!(config.endpoints.api_base_url, DISCORD_API_BASE);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.failure_policy, FailurePolicy::Detach);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "stashcord",
            "--output-dir",
            "elsewhere",
            "--concurrency",
            "2",
            "--failure-policy",
            "cancel-all",
            "--save-token",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.failure_policy, FailurePolicy::CancelAll);
        assert!(config.save_token);
        assert_eq!(config.endpoints.api_base_url, DISCORD_API_BASE);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = AppConfig {
            concurrency: 0,
            ..AppConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = AppConfig::default();
        config.endpoints.api_base_url = "ftp://discord.com".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_token_from_file_survives_merge() {
        let mut config: AppConfig = toml::from_str("save_token = true").unwrap();
        let args = CliArgs::parse_from(["stashcord", "--concurrency", "3"]);

        config.merge_with_args(&args);

        assert!(config.save_token);
        assert_eq!(config.concurrency, 3);
    }
}
