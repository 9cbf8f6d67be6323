use super::response::{message_field, pretty, succeeded};
use serde_json::Value;

pub const PREDICTIONS_POINTER: &str = "/target_response/data/predictions";
pub const UNKNOWN_PROCESSING_ERROR: &str = "Unknown processing error";

/// How a processing response reads once its shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Predictions(Vec<f64>),
    Failed { message: String, raw: String },
}

impl BatchOutcome {
    pub fn from_response(response: &Value) -> Self {
        if succeeded(response) {
            if let Some(predictions) = response.pointer(PREDICTIONS_POINTER).and_then(numbers) {
                return Self::Predictions(predictions);
            }
        }

        let message = message_field(response, &["error", "message"])
            .unwrap_or_else(|| UNKNOWN_PROCESSING_ERROR.to_string());
        Self::Failed {
            message,
            raw: pretty(response),
        }
    }
}

fn numbers(value: &Value) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(Value::as_f64).collect()
}
