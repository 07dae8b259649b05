//! Integration tests for end-to-end notification dispatch.

use anyhow::Result;
use checkwatch::config::SmsConfig;
use checkwatch::core::{Alert, Check, CheckState, Subscription, SubscriptionType};
use checkwatch::formatting::SmsTextFormatter;
use checkwatch::notification::sms::SmsNotifier;
use checkwatch::notification::NotifierSet;
use chrono::Utc;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier_set(gateway_url: &str) -> NotifierSet {
    NotifierSet::new(vec![Box::new(SmsNotifier::new(
        SmsConfig {
            gateway_url: gateway_url.to_string(),
            username: "seyren".to_string(),
            userkey: "s3cret".to_string(),
        },
        Box::new(SmsTextFormatter),
    ))])
}

fn threshold_alert(check: &Check) -> Alert {
    Alert {
        target: format!("servers.{}.value", check.name),
        value: 97.5,
        from_state: CheckState::Warn,
        to_state: check.state,
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn test_error_check_is_delivered_as_critical_sms() -> Result<()> {
    // Arrange: the gateway expects the exact form fields for a critical
    // disk-usage notification.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms"))
        .and(body_string_contains("username=seyren"))
        .and(body_string_contains("userkey=s3cret"))
        .and(body_string_contains("tolist=%2B15551234567"))
        .and(body_string_contains(
            "content=%5BCRITICAL%5D+%7C+Please+check+disk-usage",
        ))
        .and(body_string_contains("type=warn"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let notifiers = notifier_set(&format!("{}/sms", server.uri()));
    let check = Check::new("disk-usage", CheckState::Error);
    let subscription = Subscription::new("+15551234567", SubscriptionType::Sms);
    let alerts = vec![threshold_alert(&check)];

    // Act
    let handled = notifiers.dispatch(&check, &subscription, &alerts).await?;

    // Assert
    assert!(handled);
    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn test_non_sms_subscription_is_not_delivered() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifiers = notifier_set(&server.uri());
    let check = Check::new("disk-usage", CheckState::Error);
    let subscription = Subscription::new("ops@example.com", SubscriptionType::Email);

    let handled = notifiers.dispatch(&check, &subscription, &[]).await?;

    assert!(!handled);
    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_gateway_is_not_a_failure() -> Result<()> {
    let notifiers = notifier_set("");
    let check = Check::new("disk-usage", CheckState::Error);
    let subscription = Subscription::new("+15551234567", SubscriptionType::Sms);

    // The channel is selected but disabled; dispatch reports it as handled
    // without raising a delivery error.
    let handled = notifiers.dispatch(&check, &subscription, &[]).await?;

    assert!(handled);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_gateway_surfaces_delivery_error() {
    let notifiers = notifier_set("http://127.0.0.1:1/sms");
    let check = Check::new("disk-usage", CheckState::Error);
    let subscription = Subscription::new("+15551234567", SubscriptionType::Sms);

    let result = notifiers.dispatch(&check, &subscription, &[]).await;

    assert!(result.is_err());
}
