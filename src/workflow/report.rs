use super::screen::{Render, ScreenUpdate, StatusLine};
use crate::model::{ReportHandle, ReportOutcome, ReportRequest, RiskAssessment};
use crate::services::Backend;
use std::path::Path;

/// Requests the PDF report for an assessment.
///
/// Calling without an assessment is a programming error: it is logged and
/// nothing is sent.
pub async fn generate_report<B, R>(
    backend: &B,
    screen: &mut R,
    assessment: Option<&RiskAssessment>,
) -> Option<ReportHandle>
where
    B: Backend,
    R: Render + Send,
{
    let Some(assessment) = assessment.filter(|a| !a.percentage.is_empty()) else {
        log::error!("Cannot generate report: percentage or risk label is missing");
        return None;
    };

    let request = ReportRequest::from(assessment);
    log::info!(
        "Generating report for {}% ({})",
        request.percentage,
        request.risk_message
    );
    screen.render(ScreenUpdate::Status(StatusLine::info(
        "Generating PDF report...",
    )));

    match backend.generate_report(request).await {
        Ok(response) => match ReportOutcome::from_response(&response) {
            ReportOutcome::Ready(handle) => {
                log::info!("Report available at {}", handle.url);
                screen.render(ScreenUpdate::Status(StatusLine::success(
                    "PDF report generated successfully!",
                )));
                screen.render(ScreenUpdate::Report(Some(handle.clone())));
                Some(handle)
            }
            ReportOutcome::Failed(message) => {
                log::warn!("Report generation failed: {message}");
                screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                    "PDF generation error: {message}"
                ))));
                None
            }
        },
        Err(err) => {
            log::error!("Report request failed: {err}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Error generating PDF: {err}"
            ))));
            None
        }
    }
}

/// Downloads a generated report and writes it to `target`.
pub async fn save_report<B, R>(backend: &B, screen: &mut R, handle: &ReportHandle, target: &Path)
where
    B: Backend,
    R: Render + Send,
{
    screen.render(ScreenUpdate::Status(StatusLine::info("Downloading report...")));

    let bytes = match backend.fetch_bytes(&handle.url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("Report download failed: {err}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Error downloading report: {err}"
            ))));
            return;
        }
    };

    match tokio::fs::write(target, &bytes).await {
        Ok(()) => {
            log::info!("Saved report ({} bytes) to {}", bytes.len(), target.display());
            screen.render(ScreenUpdate::Status(StatusLine::success(format!(
                "Report saved to {}",
                target.display()
            ))));
        }
        Err(err) => {
            log::error!("Failed to write {}: {err}", target.display());
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Error saving report: {err}"
            ))));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::risk::classify;
    use crate::services::mock::{server_error, Call, ScriptedBackend};
    use crate::workflow::screen::{Screen, Tone};
    use serde_json::json;

    #[tokio::test]
    async fn missing_assessment_never_reaches_the_server() {
        let backend = ScriptedBackend::new();
        let mut screen = Screen::default();

        assert_eq!(generate_report(&backend, &mut screen, None).await, None);

        let mut blank = classify(0.5);
        blank.percentage.clear();
        assert_eq!(generate_report(&backend, &mut screen, Some(&blank)).await, None);

        assert!(backend.calls().is_empty());
        assert_eq!(screen, Screen::default());
    }

    #[tokio::test]
    async fn ready_report_is_exposed() {
        let backend = ScriptedBackend::new().on_report(Ok(json!({
            "success": true,
            "report_url": "/static/reports/Reporte_1.pdf"
        })));
        let mut screen = Screen::default();

        let handle = generate_report(&backend, &mut screen, Some(&classify(0.01))).await;

        let expected = ReportHandle {
            url: "/static/reports/Reporte_1.pdf".to_string(),
        };
        assert_eq!(handle.as_ref(), Some(&expected));
        assert_eq!(screen.report, Some(expected));
        assert_eq!(
            screen.status,
            StatusLine::success("PDF report generated successfully!")
        );
        assert_eq!(
            backend.report_requests()[0].risk_message,
            crate::model::RiskLabel::LowRisk
        );
    }

    #[tokio::test]
    async fn failures_are_reported_by_kind() {
        let backend = ScriptedBackend::new()
            .on_report(Ok(json!({ "success": false, "error": "Source PDF 1 not found: x.pdf" })))
            .on_report(Err(server_error(404, "missing")));
        let mut screen = Screen::default();
        let assessment = classify(0.05);

        generate_report(&backend, &mut screen, Some(&assessment)).await;
        assert_eq!(
            screen.status,
            StatusLine::failure("PDF generation error: Source PDF 1 not found: x.pdf")
        );

        generate_report(&backend, &mut screen, Some(&assessment)).await;
        assert_eq!(screen.status.tone, Tone::Failure);
        assert_eq!(
            screen.status.text,
            "Error generating PDF: Server responded with status 404: missing"
        );
        assert_eq!(screen.report, None);
    }

    #[tokio::test]
    async fn saved_report_lands_at_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.pdf");
        let backend = ScriptedBackend::new().on_fetch(Ok(b"%PDF-1.4".to_vec()));
        let mut screen = Screen::default();
        let handle = ReportHandle {
            url: "/static/reports/Reporte_1.pdf".to_string(),
        };

        save_report(&backend, &mut screen, &handle, &target).await;

        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4".to_vec());
        assert_eq!(
            backend.calls(),
            vec![Call::FetchBytes("/static/reports/Reporte_1.pdf".to_string())]
        );
        assert_eq!(screen.status.tone, Tone::Success);
    }

    #[tokio::test]
    async fn failed_download_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.pdf");
        let backend = ScriptedBackend::new().on_fetch(Err(server_error(404, "gone")));
        let mut screen = Screen::default();
        let handle = ReportHandle {
            url: "/static/reports/missing.pdf".to_string(),
        };

        save_report(&backend, &mut screen, &handle, &target).await;

        assert!(!target.exists());
        assert_eq!(
            screen.status,
            StatusLine::failure("Error downloading report: Server responded with status 404: gone")
        );
    }
}
