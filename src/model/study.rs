use super::file_handle::FileHandle;
use super::response::{message_field, succeeded};
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_STUDY_ERROR: &str = "Unknown error uploading PDFs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudySlot {
    First,
    Second,
}

impl StudySlot {
    pub fn part_name(self) -> &'static str {
        match self {
            StudySlot::First => "pdf1",
            StudySlot::Second => "pdf2",
        }
    }
}

/// The two optional documents of the study upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyForm {
    pub first: Option<FileHandle>,
    pub second: Option<FileHandle>,
}

impl StudyForm {
    pub fn slot(&self, slot: StudySlot) -> Option<&FileHandle> {
        match slot {
            StudySlot::First => self.first.as_ref(),
            StudySlot::Second => self.second.as_ref(),
        }
    }

    pub fn set(&mut self, slot: StudySlot, file: Option<FileHandle>) {
        match slot {
            StudySlot::First => self.first = file,
            StudySlot::Second => self.second = file,
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = (&'static str, &FileHandle)> {
        [StudySlot::First, StudySlot::Second]
            .into_iter()
            .filter_map(|slot| self.slot(slot).map(|file| (slot.part_name(), file)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudyOutcome {
    Stored(String),
    Rejected(String),
}

impl StudyOutcome {
    pub fn from_response(response: &Value) -> Self {
        if succeeded(response) {
            Self::Stored(message_field(response, &["message"]).unwrap_or_default())
        } else {
            Self::Rejected(
                message_field(response, &["error"])
                    .unwrap_or_else(|| UNKNOWN_STUDY_ERROR.to_string()),
            )
        }
    }
}

/// One row of the server's study listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudySummary {
    pub id: i64,
    #[serde(rename = "nombre_estudio")]
    pub name: String,
    #[serde(rename = "archivo_1", default)]
    pub first_file: Option<String>,
    #[serde(rename = "archivo_2", default)]
    pub second_file: Option<String>,
    #[serde(rename = "fecha", default)]
    pub uploaded_at: Option<String>,
}

pub fn parse_study_list(response: Value) -> Result<Vec<StudySummary>, serde_json::Error> {
    serde_json::from_value(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parts_follow_filled_slots() {
        let mut form = StudyForm::default();
        assert_eq!(form.parts().count(), 0);

        form.set(
            StudySlot::Second,
            Some(FileHandle::in_memory("b.pdf", Vec::new())),
        );
        let parts: Vec<_> = form
            .parts()
            .map(|(name, file)| (name, file.name().to_string()))
            .collect();
        assert_eq!(parts, vec![("pdf2", "b.pdf".to_string())]);
    }

    #[test]
    fn outcome_reads_message_or_error() {
        assert_eq!(
            StudyOutcome::from_response(&json!({
                "success": true,
                "message": "Archivos subidos correctamente",
                "study_id": 3
            })),
            StudyOutcome::Stored("Archivos subidos correctamente".to_string())
        );
        assert_eq!(
            StudyOutcome::from_response(&json!({ "success": false })),
            StudyOutcome::Rejected(UNKNOWN_STUDY_ERROR.to_string())
        );
    }

    #[test]
    fn listing_maps_server_keys() {
        let studies = parse_study_list(json!([{
            "id": 7,
            "nombre_estudio": "Estudio_20250101_120000_ab12cd34",
            "archivo_1": "Estudio_20250101_120000_ab12cd34_1.pdf",
            "archivo_2": "Estudio_20250101_120000_ab12cd34_2.pdf",
            "fecha": "2025-01-01 12:00:00"
        }]))
        .unwrap();

        assert_eq!(studies.len(), 1);
        assert_eq!(studies[0].id, 7);
        assert_eq!(studies[0].name, "Estudio_20250101_120000_ab12cd34");
        assert_eq!(studies[0].uploaded_at.as_deref(), Some("2025-01-01 12:00:00"));
    }
}
