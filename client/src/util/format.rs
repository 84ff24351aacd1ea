//! Display formatting for catalog values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Catalog numbers print in shortest form: `20`, `9.99`, `3.6`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Price label as shown on the detail card.
pub fn format_price(price: f64) -> String {
    format!("Price: ${}", format_number(price))
}

/// Render a specification value as plain text.
///
/// Strings print without quotes, arrays join their elements with `, `, and
/// `null` prints as an empty string.
pub fn spec_value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(values) => values.iter().map(spec_value_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
