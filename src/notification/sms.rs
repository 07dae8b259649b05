//! A notifier that delivers check-state changes through an SMS gateway.

use crate::config::SmsConfig;
use crate::core::{Alert, Check, Notifier, Subscription, SubscriptionType};
use crate::formatting::TextFormatter;
use crate::notification::error::NotificationError;
use async_trait::async_trait;
use tokio::task;
use tracing::{debug, info, warn};

/// The gateway receives `type=warn` for every request; the severity is
/// carried in the message body.
const MESSAGE_TYPE: &str = "warn";

/// Delivers notifications as form-encoded POSTs to an HTTP SMS gateway.
///
/// The gateway connection lives for exactly one call: a fresh client is built
/// per request and dropped on every exit path when the sending closure
/// returns.
pub struct SmsNotifier {
    config: SmsConfig,
    formatter: Box<dyn TextFormatter>,
}

impl SmsNotifier {
    /// Creates a new `SmsNotifier` from an immutable config snapshot.
    pub fn new(config: SmsConfig, formatter: Box<dyn TextFormatter>) -> Self {
        Self { config, formatter }
    }

    /// Executes the POST in a blocking manner and returns the response body,
    /// if the gateway sent one.
    ///
    /// Any received response counts as delivered; HTTP status codes are not
    /// interpreted. Only transport errors are failures.
    fn send_request(
        client: reqwest::blocking::Client,
        gateway_url: &str,
        params: &[(&str, String)],
    ) -> anyhow::Result<Option<String>> {
        let response = client.post(gateway_url).form(params).send()?;
        let body = response.text()?;
        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn name(&self) -> &str {
        "sms"
    }

    fn can_handle(&self, subscription_type: SubscriptionType) -> bool {
        subscription_type == SubscriptionType::Sms
    }

    async fn send_notification(
        &self,
        check: &Check,
        subscription: &Subscription,
        alerts: &[Alert],
    ) -> Result<(), NotificationError> {
        if self.config.gateway_url.is_empty() {
            warn!("SMS gateway URL is empty, cannot send notification by SMS");
            return Ok(());
        }

        debug!(
            check = %check.name,
            target = %subscription.target,
            alerts = alerts.len(),
            "Sending SMS notification"
        );

        let params: Vec<(&str, String)> = vec![
            ("username", self.config.username.clone()),
            ("userkey", self.config.userkey.clone()),
            ("tolist", subscription.target.clone()),
            ("content", self.formatter.format_check(check)),
            ("type", MESSAGE_TYPE.to_string()),
        ];

        let gateway_url = self.config.gateway_url.clone();
        let result = task::spawn_blocking(move || {
            let client = reqwest::blocking::Client::new();
            Self::send_request(client, &gateway_url, &params)
        })
        .await;

        match result {
            Ok(Ok(body)) => {
                if let Some(body) = body {
                    info!("SMS gateway response: {}", body);
                }
                Ok(())
            }
            Ok(Err(e)) => Err(NotificationError::Delivery {
                channel: "sms",
                source: e,
            }),
            Err(e) => Err(NotificationError::Delivery {
                channel: "sms",
                source: e.into(),
            }),
        }
    }
}
