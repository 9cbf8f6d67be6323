use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetadataField {
    PatientName,
    PatientId,
    StudyDate,
    PatientAge,
    PatientSex,
    Modality,
    BodyPartExamined,
    FileSize,
}

impl MetadataField {
    pub const ALL: [MetadataField; 8] = [
        MetadataField::PatientName,
        MetadataField::PatientId,
        MetadataField::StudyDate,
        MetadataField::PatientAge,
        MetadataField::PatientSex,
        MetadataField::Modality,
        MetadataField::BodyPartExamined,
        MetadataField::FileSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetadataField::PatientName => "Patient name",
            MetadataField::PatientId => "Patient ID",
            MetadataField::StudyDate => "Study date",
            MetadataField::PatientAge => "Patient age",
            MetadataField::PatientSex => "Patient sex",
            MetadataField::Modality => "Modality",
            MetadataField::BodyPartExamined => "Body part",
            MetadataField::FileSize => "File size",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// One entry of the upload response's `metadata` list.
///
/// The server stringifies DICOM attributes, but scalar values of other JSON
/// types are accepted and rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub patient_name: Option<String>,
    #[serde(default, rename = "PatientID", deserialize_with = "lenient_text")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub study_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub patient_age: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub patient_sex: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub modality: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub body_part_examined: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub file_size: Option<String>,
}

impl MetadataRecord {
    pub fn value(&self, field: MetadataField) -> Option<&str> {
        let value = match field {
            MetadataField::PatientName => &self.patient_name,
            MetadataField::PatientId => &self.patient_id,
            MetadataField::StudyDate => &self.study_date,
            MetadataField::PatientAge => &self.patient_age,
            MetadataField::PatientSex => &self.patient_sex,
            MetadataField::Modality => &self.modality,
            MetadataField::BodyPartExamined => &self.body_part_examined,
            MetadataField::FileSize => &self.file_size,
        };
        value.as_deref()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// The eight displayed metadata fields, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataView {
    values: [String; 8],
}

impl Default for MetadataView {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl MetadataView {
    pub fn placeholder() -> Self {
        Self {
            values: std::array::from_fn(|_| PLACEHOLDER.to_string()),
        }
    }

    /// Starts from the placeholder layout and overwrites every field the
    /// record carries a non-empty value for.
    pub fn from_record(record: &MetadataRecord) -> Self {
        let mut view = Self::placeholder();
        for field in MetadataField::ALL {
            if let Some(value) = record.value(field).filter(|value| !value.is_empty()) {
                view.values[field.position()] = value.to_string();
            }
        }
        view
    }

    pub fn get(&self, field: MetadataField) -> &str {
        &self.values[field.position()]
    }

    pub fn rows(&self) -> impl Iterator<Item = (MetadataField, &str)> {
        MetadataField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    pub fn is_placeholder(&self) -> bool {
        self.values.iter().all(|value| value == PLACEHOLDER)
    }
}
