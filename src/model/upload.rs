use super::metadata::MetadataRecord;
use super::response::{message_field, succeeded};
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_UPLOAD_ERROR: &str = "Unknown upload error";

/// Unpacked success response of the upload endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadResult {
    pub uploaded_names: Vec<String>,
    /// Positionally aligned with the preview panels.
    pub previews: Vec<Option<String>>,
    pub metadata: Vec<MetadataRecord>,
    /// Per-file problems the server reported next to a successful batch.
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Uploaded(UploadResult),
    Rejected(String),
}

#[derive(Deserialize)]
struct UploadBody {
    uploaded_files: Vec<String>,
    #[serde(default)]
    previews: Option<Vec<Option<String>>>,
    #[serde(default)]
    metadata: Option<Vec<MetadataRecord>>,
    #[serde(default)]
    errors: Option<Vec<String>>,
}

impl UploadOutcome {
    /// Fails only when the response claims success but does not carry the
    /// expected body.
    pub fn from_response(response: Value) -> Result<Self, serde_json::Error> {
        if !succeeded(&response) {
            let message = message_field(&response, &["error"])
                .unwrap_or_else(|| UNKNOWN_UPLOAD_ERROR.to_string());
            return Ok(Self::Rejected(message));
        }

        let body: UploadBody = serde_json::from_value(response)?;
        Ok(Self::Uploaded(UploadResult {
            uploaded_names: body.uploaded_files,
            previews: body.previews.unwrap_or_default(),
            metadata: body.metadata.unwrap_or_default(),
            errors: body.errors.unwrap_or_default(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_unpacks_names_previews_and_metadata() {
        let outcome = UploadOutcome::from_response(json!({
            "success": true,
            "uploaded_files": ["a.dcm", "b.dcm"],
            "previews": ["p1.png", null],
            "errors": ["Preview failed for b.dcm"],
            "metadata": [{ "PatientID": "X" }]
        }))
        .unwrap();

        let UploadOutcome::Uploaded(result) = outcome else {
            panic!("expected an uploaded batch");
        };
        assert_eq!(result.uploaded_names, vec!["a.dcm", "b.dcm"]);
        assert_eq!(result.previews, vec![Some("p1.png".to_string()), None]);
        assert_eq!(result.metadata[0].patient_id.as_deref(), Some("X"));
        assert_eq!(result.errors, vec!["Preview failed for b.dcm"]);
    }

    #[test]
    fn null_lists_are_empty() {
        let outcome = UploadOutcome::from_response(json!({
            "success": true,
            "uploaded_files": [],
            "previews": null,
            "metadata": null
        }))
        .unwrap();
        assert_eq!(outcome, UploadOutcome::Uploaded(UploadResult::default()));
    }

    #[test]
    fn failure_flag_carries_server_error() {
        let outcome = UploadOutcome::from_response(json!({
            "success": false,
            "error": "Invalid file type: notes.txt"
        }))
        .unwrap();
        assert_eq!(
            outcome,
            UploadOutcome::Rejected("Invalid file type: notes.txt".to_string())
        );

        let outcome = UploadOutcome::from_response(json!({ "success": false })).unwrap();
        assert_eq!(
            outcome,
            UploadOutcome::Rejected(UNKNOWN_UPLOAD_ERROR.to_string())
        );
    }

    #[test]
    fn success_without_file_list_is_malformed() {
        assert!(UploadOutcome::from_response(json!({ "success": true })).is_err());
    }
}
