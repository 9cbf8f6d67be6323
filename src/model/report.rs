use super::response::{message_field, succeeded};
use super::risk::{RiskAssessment, RiskLabel};
use serde::Serialize;
use serde_json::Value;

pub const UNKNOWN_REPORT_ERROR: &str = "Unknown error";

/// Body of the report generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub percentage: String,
    #[serde(rename = "riskMessage")]
    pub risk_message: RiskLabel,
}

impl From<&RiskAssessment> for ReportRequest {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            percentage: assessment.percentage.clone(),
            risk_message: assessment.label,
        }
    }
}

/// Locator of a generated report, usually relative to the server root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHandle {
    pub url: String,
}

impl ReportHandle {
    /// Last path segment, used as the suggested name when saving.
    pub fn file_name(&self) -> &str {
        self.url
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("report.pdf")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Ready(ReportHandle),
    Failed(String),
}

impl ReportOutcome {
    pub fn from_response(response: &Value) -> Self {
        let url = response
            .get("report_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty());

        match url {
            Some(url) if succeeded(response) => Self::Ready(ReportHandle {
                url: url.to_string(),
            }),
            _ => Self::Failed(
                message_field(response, &["error"])
                    .unwrap_or_else(|| UNKNOWN_REPORT_ERROR.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::risk::classify;
    use serde_json::json;

    #[test]
    fn request_uses_wire_field_names() {
        let request = ReportRequest::from(&classify(0.035));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "percentage": "3.50", "riskMessage": "HIGH_RISK" })
        );
    }

    #[test]
    fn ready_needs_flag_and_locator() {
        assert_eq!(
            ReportOutcome::from_response(&json!({
                "success": true,
                "report_url": "/static/reports/Reporte_ab12.pdf"
            })),
            ReportOutcome::Ready(ReportHandle {
                url: "/static/reports/Reporte_ab12.pdf".to_string()
            })
        );
        assert_eq!(
            ReportOutcome::from_response(&json!({ "success": true })),
            ReportOutcome::Failed(UNKNOWN_REPORT_ERROR.to_string())
        );
        assert_eq!(
            ReportOutcome::from_response(&json!({
                "success": false,
                "error": "No PDF studies found to merge. Please upload PDFs first."
            })),
            ReportOutcome::Failed(
                "No PDF studies found to merge. Please upload PDFs first.".to_string()
            )
        );
    }

    #[test]
    fn file_name_is_last_segment() {
        let handle = ReportHandle {
            url: "/static/reports/Reporte_ab12.pdf".to_string(),
        };
        assert_eq!(handle.file_name(), "Reporte_ab12.pdf");
        assert_eq!(
            ReportHandle { url: "/".to_string() }.file_name(),
            "report.pdf"
        );
    }
}
