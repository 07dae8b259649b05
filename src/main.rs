//! CheckWatch - SMS notification smoke tool
//!
//! Builds one check-state notification from command-line flags and delivers
//! it through the configured SMS gateway. Useful for verifying gateway
//! credentials and connectivity without running a full monitoring stack.

use anyhow::Result;
use checkwatch::{
    cli::Cli,
    config::Config,
    core::{Check, Subscription, SubscriptionType},
    formatting::SmsTextFormatter,
    notification::{sms::SmsNotifier, NotifierSet},
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    // Initialize logging; RUST_LOG takes precedence over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("CheckWatch starting up...");
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!(
        "SMS Gateway: {}",
        if config.sms.gateway_url.is_empty() {
            "Disabled"
        } else {
            config.sms.gateway_url.as_str()
        }
    );
    info!("-------------------------------------------------------");

    let target = cli
        .target
        .clone()
        .ok_or_else(|| anyhow::anyhow!("--target is required to send a notification"))?;

    let check = Check::new(&cli.check, cli.state);
    let subscription = Subscription::new(&target, SubscriptionType::Sms);

    let notifiers = NotifierSet::new(vec![Box::new(SmsNotifier::new(
        config.sms.clone(),
        Box::new(SmsTextFormatter),
    ))]);

    let handled = notifiers.dispatch(&check, &subscription, &[]).await?;
    if handled {
        info!(
            "Notification for check '{}' ({}) dispatched to {}",
            check.name, check.state, subscription.target
        );
    } else {
        warn!("No notifier handles the subscription; nothing sent");
    }

    Ok(())
}
