//! Error types for the notification layer.

use thiserror::Error;

/// Defines the possible errors that can occur while delivering a notification.
///
/// A channel that is not configured is *not* an error; notifiers treat it as
/// a disabled channel and return successfully without sending anything.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The delivery attempt failed while building, executing, or reading the
    /// outbound request. The original cause is preserved for diagnostics.
    #[error("failed to send notification over {channel}")]
    Delivery {
        /// Name of the channel that attempted the delivery.
        channel: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
