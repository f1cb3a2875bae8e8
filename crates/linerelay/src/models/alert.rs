//! Alertmanager webhook payload types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single alert from an Alertmanager webhook batch.
///
/// Every field is optional: any JSON object is a decodable alert, and missing
/// fields simply contribute nothing to the formatted message. Fields the
/// relay does not read (`startsAt`, `generatorURL`, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Alert state, usually "firing" or "resolved"
    pub status: Option<String>,
    /// Label set; `alertname` and `severity` feed the formatter
    pub labels: Option<HashMap<String, String>>,
    /// Annotation set; `summary` and `description` feed the formatter
    pub annotations: Option<HashMap<String, String>>,
}

impl Alert {
    /// Look up a label value, treating an empty string as absent.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .as_ref()?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Look up an annotation value, treating an empty string as absent.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Look up a top-level property of a webhook body.
///
/// Collapses the non-signal shapes into `None`: no body at all, a body that
/// is not a JSON object, a missing key, and a key whose value is an *empty
/// object*. Anything else comes back untouched, so an empty *array* is still
/// a present value and gets rejected later with a more specific error.
pub fn extract_property<'a>(body: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    let value = body?.as_object()?.get(key)?;
    match value.as_object() {
        Some(map) if map.is_empty() => None,
        _ => Some(value),
    }
}

/// Decode the `alerts` value into typed alerts.
///
/// Strict about shape: the value must be an array and every element must be
/// a JSON object. Scalars, strings, and nulls in the array are decode errors
/// rather than silently skipped entries.
pub fn decode_alerts(value: &Value) -> Result<Vec<Alert>, serde_json::Error> {
    Vec::<Alert>::deserialize(value)
}
