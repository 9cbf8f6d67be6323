use super::present::{present_metadata, render_previews, reset_display};
use super::screen::{Render, ResultsView, ScreenUpdate, StatusLine};
use crate::model::{FileHandle, UploadOutcome, UploadResult};
use crate::services::Backend;

/// Uploads one batch and fills the preview panels and metadata from the
/// response. Every outcome leaves panels and metadata in a defined state.
pub async fn submit_files<B, R>(
    backend: &B,
    screen: &mut R,
    files: Vec<FileHandle>,
) -> Option<UploadResult>
where
    B: Backend,
    R: Render + Send,
{
    log::info!("Uploading {} file(s)", files.len());
    screen.render(ScreenUpdate::Status(StatusLine::info("Uploading...")));
    screen.render(ScreenUpdate::Results(ResultsView::Empty));
    reset_display(screen);

    let outcome = backend
        .upload(files)
        .await
        .and_then(|response| Ok(UploadOutcome::from_response(response)?));

    match outcome {
        Ok(UploadOutcome::Uploaded(result)) => {
            screen.render(ScreenUpdate::Status(StatusLine::success(format!(
                "Uploaded {} file(s)",
                result.uploaded_names.len()
            ))));
            render_previews(screen, &result.previews);
            present_metadata(screen, result.metadata.first());

            if !result.errors.is_empty() {
                log::warn!("Server skipped part of the batch: {}", result.errors.join(", "));
                screen.render(ScreenUpdate::Results(ResultsView::UploadWarnings(
                    result.errors.clone(),
                )));
            }
            Some(result)
        }
        Ok(UploadOutcome::Rejected(message)) => {
            log::warn!("Upload rejected: {message}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Error: {message}"
            ))));
            reset_display(screen);
            None
        }
        Err(err) => {
            log::error!("Upload request failed: {err}");
            screen.render(ScreenUpdate::Status(StatusLine::failure(format!(
                "Network Error or invalid response: {err}"
            ))));
            reset_display(screen);
            None
        }
    }
}
