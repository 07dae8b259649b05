// src/formatting.rs

use crate::core::{Check, CheckState};
use tracing::info;

/// A trait for formatting a check's state change into a message body.
pub trait TextFormatter: Send + Sync {
    fn format_check(&self, check: &Check) -> String;
}

/// A formatter producing the short, single-line body sent over SMS.
pub struct SmsTextFormatter;

impl TextFormatter for SmsTextFormatter {
    fn format_check(&self, check: &Check) -> String {
        match check.state {
            CheckState::Error => format!("[CRITICAL] | Please check {}", check.name),
            CheckState::Warn => format!("[WARN] | Please check {}", check.name),
            CheckState::Ok => format!("[OK] | {}", check.name),
            other => {
                // Unmanaged states degrade to an empty body rather than
                // failing the delivery.
                info!(
                    "Unmanaged check state [{}] for check [{}]",
                    other, check.name
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_state() {
        let formatter = SmsTextFormatter;
        let check = Check::new("disk-usage", CheckState::Error);
        assert_eq!(
            formatter.format_check(&check),
            "[CRITICAL] | Please check disk-usage"
        );
    }

    #[test]
    fn test_format_warn_state() {
        let formatter = SmsTextFormatter;
        let check = Check::new("api-latency", CheckState::Warn);
        assert_eq!(
            formatter.format_check(&check),
            "[WARN] | Please check api-latency"
        );
    }

    #[test]
    fn test_format_ok_state() {
        let formatter = SmsTextFormatter;
        let check = Check::new("api-latency", CheckState::Ok);
        assert_eq!(formatter.format_check(&check), "[OK] | api-latency");
    }

    #[test]
    fn test_unmanaged_states_produce_empty_body() {
        let formatter = SmsTextFormatter;
        for state in [CheckState::Exception, CheckState::Unknown] {
            let check = Check::new("queue-depth", state);
            assert_eq!(formatter.format_check(&check), "");
        }
    }
}
