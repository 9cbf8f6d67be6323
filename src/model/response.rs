//! Helpers for reading the loosely-typed JSON the server answers with.

use serde_json::Value;

/// Truthiness as the server's clients have always read its flags: absent,
/// `null`, `false`, `0` and `""` are false, everything else is true.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub fn succeeded(response: &Value) -> bool {
    is_truthy(response.get("success"))
}

/// First truthy field among `keys`, rendered as text.
pub fn message_field(response: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| response.get(*key))
        .find(|value| is_truthy(Some(value)))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
}

/// Two-space indented JSON, for dumping a response into the results area.
pub fn pretty(response: &Value) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
}
