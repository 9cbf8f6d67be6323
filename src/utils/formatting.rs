use crate::model::{FileHandle, RiskAssessment, StudySummary};

const MAX_LINE_LEN: usize = 240;

/// Server error bodies can be whole HTML pages; keep status lines readable.
pub fn truncate_for_display(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > MAX_LINE_LEN {
        let mut truncated = single_line.chars().take(MAX_LINE_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        single_line
    }
}

pub fn prediction_line(assessment: &RiskAssessment) -> String {
    format!("Prediction: {}%", assessment.percentage)
}

pub fn raw_value_line(assessment: &RiskAssessment) -> String {
    format!("(Raw value: {})", assessment.raw)
}

pub fn file_label(file: Option<&FileHandle>) -> String {
    file.map(|file| file.name().to_string())
        .unwrap_or_else(|| "No file selected".to_string())
}

pub fn study_line(study: &StudySummary) -> String {
    let uploaded = study.uploaded_at.as_deref().unwrap_or("N/A");
    format!("#{} {} ({uploaded})", study.id, study.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::risk::classify;

    #[test]
    fn long_text_is_flattened_and_cut() {
        let body = format!("<html>\n  <body>{}</body>\n</html>", "x".repeat(400));
        let line = truncate_for_display(&body);
        assert!(!line.contains('\n'));
        assert_eq!(line.chars().count(), MAX_LINE_LEN + 1);
        assert!(line.ends_with('…'));

        assert_eq!(truncate_for_display("short  text"), "short text");
    }

    #[test]
    fn assessment_lines() {
        let assessment = classify(0.035);
        assert_eq!(prediction_line(&assessment), "Prediction: 3.50%");
        assert_eq!(raw_value_line(&assessment), "(Raw value: 0.035)");
    }

    #[test]
    fn labels_for_optional_files() {
        assert_eq!(file_label(None), "No file selected");
        let file = FileHandle::in_memory("study.pdf", Vec::new());
        assert_eq!(file_label(Some(&file)), "study.pdf");
    }
}
