//! Configuration management for CheckWatch
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `checkwatch.toml` file and merge it
//! with environment variables and command-line arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for the SMS gateway channel.
    pub sms: SmsConfig,
}

/// Immutable snapshot of the SMS gateway settings.
///
/// An empty `gateway_url` means the channel is disabled: notifications for
/// SMS subscriptions are accepted and dropped with a warning instead of
/// being treated as failures.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SmsConfig {
    /// The HTTP endpoint of the SMS gateway.
    pub gateway_url: String,
    /// Account username sent with every request.
    pub username: String,
    /// Account key sent with every request.
    pub userkey: String,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// TOML file, environment variables, and CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| "checkwatch.toml".into());

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., CHECKWATCH_LOG_LEVEL=debug
            .merge(Env::prefixed("CHECKWATCH_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup. The SMS channel
// starts out disabled until a gateway URL is configured.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            sms: SmsConfig::default(),
        }
    }
}
