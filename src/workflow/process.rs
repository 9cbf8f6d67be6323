use super::report::generate_report;
use super::screen::{Render, ResultsView, ScreenUpdate, StatusLine};
use crate::model::risk::{assess, MIN_PREDICTIONS};
use crate::model::{BatchOutcome, RiskAssessment};
use crate::services::Backend;

/// Runs the model over the files already on the server, classifies the
/// result and, for a complete batch, requests the report.
///
/// The report request is only issued once classification has finished.
pub async fn process_recent<B, R>(backend: &B, screen: &mut R) -> Option<RiskAssessment>
where
    B: Backend,
    R: Render + Send,
{
    log::info!("Processing recent DICOMs");
    screen.render(ScreenUpdate::Status(StatusLine::info(
        "Processing recent DICOMs...",
    )));
    screen.render(ScreenUpdate::Results(ResultsView::Empty));
    screen.render(ScreenUpdate::Report(None));

    let response = match backend.process_recent().await {
        Ok(response) => response,
        Err(err) => {
            log::error!("Processing request failed: {err}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Network Error or processing failure: {err}"
            ))));
            screen.render(ScreenUpdate::Results(ResultsView::TransportFailure(format!(
                "Failed to connect or process: {err}"
            ))));
            return None;
        }
    };

    let predictions = match BatchOutcome::from_response(&response) {
        BatchOutcome::Predictions(predictions) => predictions,
        BatchOutcome::Failed { message, raw } => {
            log::warn!("Processing failed: {message}");
            log::debug!("Processing response: {raw}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Error: {message}"
            ))));
            screen.render(ScreenUpdate::Results(ResultsView::RawResponse(raw)));
            return None;
        }
    };

    screen.render(ScreenUpdate::Status(StatusLine::success(
        "Processing successful!",
    )));

    let Some(assessment) = assess(&predictions) else {
        log::warn!(
            "Processing returned {} prediction(s), need at least {MIN_PREDICTIONS}",
            predictions.len()
        );
        screen.render(ScreenUpdate::Results(ResultsView::InsufficientPredictions));
        return None;
    };

    log::info!(
        "Prediction {} -> {}% {}",
        assessment.raw,
        assessment.percentage,
        assessment.label
    );
    screen.render(ScreenUpdate::Results(ResultsView::Assessment(
        assessment.clone(),
    )));

    generate_report(backend, screen, Some(&assessment)).await;
    Some(assessment)
}
