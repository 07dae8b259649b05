//! Core domain types and service traits for CheckWatch
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern how alert-state changes flow into notification channels.

use crate::notification::error::NotificationError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity state of a monitored check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckState {
    /// The check is within its thresholds.
    #[default]
    Ok,
    /// The warn threshold has been crossed.
    Warn,
    /// The error threshold has been crossed.
    Error,
    /// The check evaluation itself failed.
    Exception,
    /// No data is available for the check.
    Unknown,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckState::Ok => "OK",
            CheckState::Warn => "WARN",
            CheckState::Error => "ERROR",
            CheckState::Exception => "EXCEPTION",
            CheckState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

impl FromStr for CheckState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OK" => Ok(CheckState::Ok),
            "WARN" => Ok(CheckState::Warn),
            "ERROR" => Ok(CheckState::Error),
            "EXCEPTION" => Ok(CheckState::Exception),
            "UNKNOWN" => Ok(CheckState::Unknown),
            other => Err(format!("unrecognized check state: {other}")),
        }
    }
}

/// A monitored condition, owned by the evaluation engine.
///
/// Read-only input to the notification layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Check {
    /// Human-readable name of the check (e.g., "disk-usage").
    pub name: String,
    /// The severity state the check is currently in.
    pub state: CheckState,
}

impl Check {
    /// Creates a check in the given state.
    pub fn new(name: &str, state: CheckState) -> Self {
        Self {
            name: name.to_string(),
            state,
        }
    }
}

/// The channel a subscription wants to be notified on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    Email,
    Slack,
    Webhook,
    Sms,
}

/// A delivery target for notifications about a check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    /// Destination address for the channel (phone number, email, URL, ...).
    pub target: String,
    /// The channel this subscription is delivered on.
    pub subscription_type: SubscriptionType,
}

impl Subscription {
    pub fn new(target: &str, subscription_type: SubscriptionType) -> Self {
        Self {
            target: target.to_string(),
            subscription_type,
        }
    }
}

/// A single threshold-crossing event recorded against a check.
///
/// Alerts are carried through to the notification channels, and the channels
/// themselves decide how much of this data to use; the SMS channel only
/// reports their count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// The metric target the observed value came from.
    pub target: String,
    /// The observed value that crossed a threshold.
    pub value: f64,
    /// State the check was in before this event.
    pub from_state: CheckState,
    /// State the check transitioned to.
    pub to_state: CheckState,
    /// When the transition was observed.
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Service Traits
// =============================================================================

/// Delivers a check's alert-state change through one notification channel.
///
/// Implementations are selected by predicate: the caller holds a collection
/// of notifiers and picks the one whose `can_handle` accepts the
/// subscription's channel tag.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A unique, descriptive name for the channel (e.g., "sms").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Returns true iff this notifier delivers on the given channel.
    ///
    /// Pure and O(1); no side effects.
    fn can_handle(&self, subscription_type: SubscriptionType) -> bool;

    /// Delivers one notification for `check` to `subscription`.
    ///
    /// # Arguments
    /// * `check` - The check whose state change is being notified
    /// * `subscription` - The delivery target
    /// * `alerts` - The threshold-crossing events behind the change; may be empty
    ///
    /// # Returns
    /// * `Ok(())` if the message was delivered, or if the channel is not
    ///   configured (a disabled channel is not a delivery failure)
    /// * `Err` if the delivery attempt itself failed
    async fn send_notification(
        &self,
        check: &Check,
        subscription: &Subscription,
        alerts: &[Alert],
    ) -> Result<(), NotificationError>;
}
