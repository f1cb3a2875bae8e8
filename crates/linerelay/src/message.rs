//! Formatting alerts into LINE-ready text messages

use crate::models::Alert;

/// Visual marker for a severity label.
///
/// The match is exact and case-sensitive; anything unrecognized, an empty
/// string included, gets the white marker.
pub fn severity_marker(severity: &str) -> &'static str {
    match severity {
        "none" => "🔵",
        "warning" => "🟡",
        "critical" => "🔴",
        _ => "⚪",
    }
}

/// Format one message per alert, in input order, dropping alerts that
/// produce an empty message.
pub fn build_messages(alerts: &[Alert]) -> Vec<String> {
    alerts
        .iter()
        .map(build_message)
        .filter(|message| !message.is_empty())
        .collect()
}

/// Format a single alert.
///
/// Populated fields appear in a fixed order, one line each. Every line is
/// prefixed with a newline so concatenated messages stay readable in the
/// LINE client, which prepends its own header to the text.
fn build_message(alert: &Alert) -> String {
    let mut message = String::new();

    if let Some(alertname) = alert.label("alertname") {
        message.push_str("\nAlert Name: ");
        message.push_str(alertname);
    }

    if let Some(status) = alert.status.as_deref().filter(|s| !s.is_empty()) {
        message.push_str("\nStatus: ");
        message.push_str(status);
    }

    if let Some(severity) = alert.label("severity") {
        message.push_str("\nSeverity: ");
        message.push_str(severity_marker(severity));
        message.push(' ');
        message.push_str(severity);
    }

    if let Some(summary) = alert.annotation("summary") {
        message.push_str("\nSummary: ");
        message.push_str(summary);
    }

    if let Some(description) = alert.annotation("description") {
        message.push_str("\nDescription: ");
        message.push_str(description);
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn labels(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn create_test_alert() -> Alert {
        Alert {
            status: Some("Firing".to_string()),
            labels: labels(&[("alertname", "Test Alert"), ("severity", "critical")]),
            annotations: labels(&[
                ("summary", "Test Summary"),
                ("description", "Test Description"),
            ]),
        }
    }

    #[rstest]
    #[case("none", "🔵")]
    #[case("warning", "🟡")]
    #[case("critical", "🔴")]
    #[case("unknown", "⚪")]
    #[case("", "⚪")]
    #[case("Critical", "⚪")]
    fn test_severity_marker(#[case] severity: &str, #[case] marker: &str) {
        assert_eq!(severity_marker(severity), marker);
    }

    #[test]
    fn test_empty_alert_list_builds_no_messages() {
        assert_eq!(build_messages(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_alert_with_empty_labels_and_annotations_is_dropped() {
        let alert = Alert {
            status: None,
            labels: labels(&[]),
            annotations: labels(&[]),
        };

        assert_eq!(build_messages(&[alert]), Vec::<String>::new());
    }

    #[test]
    fn test_alert_name_only() {
        let alert = Alert {
            labels: labels(&[("alertname", "Test Alert")]),
            ..Alert::default()
        };

        assert_eq!(build_messages(&[alert]), ["\nAlert Name: Test Alert"]);
    }

    #[test]
    fn test_status_only() {
        let alert = Alert {
            status: Some("Firing".to_string()),
            ..Alert::default()
        };

        assert_eq!(build_messages(&[alert]), ["\nStatus: Firing"]);
    }

    #[test]
    fn test_severity_only() {
        let alert = Alert {
            labels: labels(&[("severity", "critical")]),
            ..Alert::default()
        };

        assert_eq!(build_messages(&[alert]), ["\nSeverity: 🔴 critical"]);
    }

    #[test]
    fn test_unknown_severity_uses_default_marker() {
        let alert = Alert {
            labels: labels(&[("severity", "unknownSeverity")]),
            ..Alert::default()
        };

        assert_eq!(
            build_messages(&[alert]),
            ["\nSeverity: ⚪ unknownSeverity"]
        );
    }

    #[test]
    fn test_summary_only() {
        let alert = Alert {
            annotations: labels(&[("summary", "Test Summary")]),
            ..Alert::default()
        };

        assert_eq!(build_messages(&[alert]), ["\nSummary: Test Summary"]);
    }

    #[test]
    fn test_description_only() {
        let alert = Alert {
            annotations: labels(&[("description", "Test Description")]),
            ..Alert::default()
        };

        assert_eq!(
            build_messages(&[alert]),
            ["\nDescription: Test Description"]
        );
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let expected = "\nAlert Name: Test Alert\
                        \nStatus: Firing\
                        \nSeverity: 🔴 critical\
                        \nSummary: Test Summary\
                        \nDescription: Test Description";

        assert_eq!(build_messages(&[create_test_alert()]), [expected]);
    }

    #[test]
    fn test_two_alerts_build_two_messages() {
        let alerts = [create_test_alert(), create_test_alert()];

        let messages = build_messages(&alerts);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], messages[1]);
    }

    #[test]
    fn test_empty_alert_is_dropped_but_order_is_kept() {
        let alerts = [create_test_alert(), Alert::default(), create_test_alert()];

        let messages = build_messages(&alerts);

        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("\nAlert Name: Test Alert"));
    }
}
