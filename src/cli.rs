//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `checkwatch.toml` file and environment
//! variables.

use crate::core::CheckState;
use clap::Parser;
use figment::{
    providers::Serialized,
    value::{Dict, Map},
    Error, Metadata, Profile, Provider,
};
use serde::Serialize;
use std::path::PathBuf;

/// Sends a single check notification through the configured SMS gateway.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the SMS gateway URL from the configuration.
    #[arg(long, value_name = "URL")]
    pub gateway_url: Option<String>,

    /// Name of the check to notify about.
    #[arg(long, value_name = "NAME", default_value = "smoke-test")]
    pub check: String,

    /// State the check is in (ok, warn, error, exception, unknown).
    #[arg(long, value_name = "STATE", default_value = "warn")]
    pub state: CheckState,

    /// Destination phone number for the SMS subscription.
    #[arg(long, value_name = "MSISDN")]
    pub target: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        // Only configuration overrides go through figment; the check, state,
        // and target flags describe the one notification to send, not config.
        #[derive(Serialize)]
        struct SmsOverrides<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            gateway_url: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct Overrides<'a> {
            sms: SmsOverrides<'a>,
        }

        Serialized::defaults(Overrides {
            sms: SmsOverrides {
                gateway_url: self.gateway_url.as_deref(),
            },
        })
        .data()
    }
}
