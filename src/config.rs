//! Configuration management for Browser-Steps

use crate::helpers::scripts::JQUERY_URL;
use crate::helpers::MaildevSelectors;
use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Prefix of every environment variable read by [`Config`]
pub const ENV_PREFIX: &str = "BROWSER_STEPS";

/// Step helper configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maildev hostname, resolved when handed to `MaildevSteps::set_mail_dev_host`
    pub mail_host: Option<String>,

    /// URL of the jQuery build injected into the Maildev UI
    pub jquery_url: String,

    /// Fixed delay after injecting jQuery, in milliseconds
    pub script_load_wait_ms: u64,

    /// How long to wait for an opened message to show, in seconds
    pub preview_visible_timeout_secs: u64,

    /// Log level
    pub log_level: String,

    /// Maildev UI selectors
    pub maildev: MaildevSelectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mail_host: None,
            jquery_url: JQUERY_URL.to_string(),
            script_load_wait_ms: 2000,
            preview_visible_timeout_secs: 2,
            log_level: "info".to_string(),
            maildev: MaildevSelectors::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(mail_host) = env::var("BROWSER_STEPS_MAIL_HOST") {
            config.mail_host = Some(mail_host);
        }

        if let Ok(jquery_url) = env::var("BROWSER_STEPS_JQUERY_URL") {
            config.jquery_url = jquery_url;
        }

        if let Ok(wait) = env::var("BROWSER_STEPS_SCRIPT_LOAD_WAIT_MS") {
            config.script_load_wait_ms = wait
                .parse()
                .map_err(|_| Error::configuration("Invalid BROWSER_STEPS_SCRIPT_LOAD_WAIT_MS"))?;
        }

        if let Ok(timeout) = env::var("BROWSER_STEPS_PREVIEW_VISIBLE_TIMEOUT_SECS") {
            config.preview_visible_timeout_secs = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid BROWSER_STEPS_PREVIEW_VISIBLE_TIMEOUT_SECS"))?;
        }

        if let Ok(log_level) = env::var("BROWSER_STEPS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load defaults, then an optional TOML file, then `BROWSER_STEPS_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `BROWSER_STEPS_MAILDEV__PREVIEW_IFRAME`.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::new(path, ::config::FileFormat::Toml));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Install the global tracing subscriber at `log_level`; see [`crate::logging::init_tracing`]
    pub fn init_tracing(&self) -> bool {
        crate::logging::init_tracing(&self.log_level)
    }
}
