//! Output formatting utilities.

use serde_json::Value;

/// Formats a value as pretty-printed JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a labelled row for human-readable output.
pub fn format_row(label: &str, value: &str) -> String {
    format!("{:<12} {}", label, value)
}
