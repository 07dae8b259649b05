//! Handles the dispatching of check-state changes to notification channels.
//!
//! Each channel implements the [`Notifier`](crate::core::Notifier) trait and
//! declares which subscription types it handles. The caller holds a
//! [`NotifierSet`] and routes every subscription to the first notifier whose
//! `can_handle` predicate accepts its channel tag, so adding a channel never
//! touches the dispatch logic.
pub mod error;
pub mod sms;

use crate::core::{Alert, Check, Notifier, Subscription};
use crate::notification::error::NotificationError;
use tracing::debug;

/// A collection of notification channels, selected by predicate.
pub struct NotifierSet {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierSet {
    /// Creates a new `NotifierSet` over the given channels.
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    /// Returns the first notifier that handles the subscription's channel.
    pub fn notifier_for(&self, subscription: &Subscription) -> Option<&dyn Notifier> {
        self.notifiers
            .iter()
            .map(|n| n.as_ref())
            .find(|n| n.can_handle(subscription.subscription_type))
    }

    /// Routes one notification to the channel matching the subscription.
    ///
    /// # Returns
    /// * `Ok(true)` if a channel handled the subscription
    /// * `Ok(false)` if no channel handles its subscription type
    /// * `Err` if the selected channel failed to deliver
    pub async fn dispatch(
        &self,
        check: &Check,
        subscription: &Subscription,
        alerts: &[Alert],
    ) -> Result<bool, NotificationError> {
        match self.notifier_for(subscription) {
            Some(notifier) => {
                debug!(
                    channel = notifier.name(),
                    check = %check.name,
                    "Dispatching notification"
                );
                notifier.send_notification(check, subscription, alerts).await?;
                Ok(true)
            }
            None => {
                debug!(
                    subscription_type = ?subscription.subscription_type,
                    "No notifier handles subscription type"
                );
                Ok(false)
            }
        }
    }
}
