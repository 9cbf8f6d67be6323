use super::screen::{Render, ScreenUpdate, StatusLine, StudyList};
use crate::model::study::parse_study_list;
use crate::model::{StudyForm, StudyOutcome};
use crate::services::Backend;

/// Uploads the study form's documents; on success the form is cleared and the
/// study list refreshed.
pub async fn submit_study<B, R>(backend: &B, screen: &mut R, form: StudyForm)
where
    B: Backend,
    R: Render + Send,
{
    log::info!("Uploading study with {} PDF(s)", form.parts().count());
    screen.render(ScreenUpdate::StudyStatus(StatusLine::info(
        "Uploading PDFs...",
    )));

    match backend.upload_study(form).await {
        Ok(response) => match StudyOutcome::from_response(&response) {
            StudyOutcome::Stored(message) => {
                screen.render(ScreenUpdate::StudyStatus(StatusLine::success(message)));
                screen.render(ScreenUpdate::ClearStudyForm);
                refresh_studies(backend, screen).await;
            }
            StudyOutcome::Rejected(message) => {
                log::warn!("Study upload rejected: {message}");
                screen.render(ScreenUpdate::StudyStatus(StatusLine::failure(format!(
                    "Error: {message}"
                ))));
            }
        },
        Err(err) => {
            log::error!("Study upload failed: {err}");
            screen.render(ScreenUpdate::StudyStatus(StatusLine::failure(format!(
                "Network or server error: {err}"
            ))));
        }
    }
}

pub async fn refresh_studies<B, R>(backend: &B, screen: &mut R)
where
    B: Backend,
    R: Render + Send,
{
    let listing = backend
        .list_studies()
        .await
        .and_then(|response| Ok(parse_study_list(response)?));

    match listing {
        Ok(studies) => {
            log::debug!("Server lists {} stud(ies)", studies.len());
            screen.render(ScreenUpdate::Studies(StudyList::Loaded(studies)));
        }
        Err(err) => {
            log::warn!("Could not load studies: {err}");
            screen.render(ScreenUpdate::Studies(StudyList::Failed(err.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileHandle, StudySlot};
    use crate::services::mock::{server_error, Call, ScriptedBackend};
    use crate::workflow::screen::{Screen, Tone};
    use serde_json::json;

    fn filled_form() -> StudyForm {
        let mut form = StudyForm::default();
        form.set(StudySlot::First, Some(FileHandle::in_memory("a.pdf", vec![1])));
        form.set(StudySlot::Second, Some(FileHandle::in_memory("b.pdf", vec![2])));
        form
    }

    #[tokio::test]
    async fn stored_study_clears_form_and_refreshes_list() {
        let backend = ScriptedBackend::new()
            .on_study_upload(Ok(json!({
                "success": true,
                "message": "Archivos subidos correctamente",
                "study_id": 1
            })))
            .on_list_studies(Ok(json!([{
                "id": 1,
                "nombre_estudio": "Estudio_1",
                "archivo_1": "Estudio_1_1.pdf",
                "archivo_2": "Estudio_1_2.pdf",
                "fecha": "2025-02-03 10:00:00"
            }])));
        let mut screen = Screen::default();
        screen.study_form = filled_form();

        submit_study(&backend, &mut screen, filled_form()).await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::UploadStudy(vec![
                    ("pdf1", "a.pdf".to_string()),
                    ("pdf2", "b.pdf".to_string())
                ]),
                Call::ListStudies,
            ]
        );
        assert_eq!(
            screen.study_status,
            StatusLine::success("Archivos subidos correctamente")
        );
        assert_eq!(screen.study_form, StudyForm::default());
        assert!(matches!(&screen.studies, StudyList::Loaded(list) if list.len() == 1));
        assert_eq!(screen.status, StatusLine::default());
    }

    #[tokio::test]
    async fn rejection_keeps_the_selection() {
        let backend = ScriptedBackend::new().on_study_upload(Ok(json!({
            "success": false,
            "error": "Se requieren dos archivos PDF"
        })));
        let mut screen = Screen::default();
        screen.study_form = filled_form();

        submit_study(&backend, &mut screen, filled_form()).await;

        assert_eq!(
            screen.study_status,
            StatusLine::failure("Error: Se requieren dos archivos PDF")
        );
        assert_eq!(screen.study_form, filled_form());
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_uses_its_own_wording() {
        let backend =
            ScriptedBackend::new().on_study_upload(Err(server_error(413, "Too Large")));
        let mut screen = Screen::default();

        submit_study(&backend, &mut screen, StudyForm::default()).await;

        assert_eq!(screen.study_status.tone, Tone::Failure);
        assert_eq!(
            screen.study_status.text,
            "Network or server error: Server responded with status 413: Too Large"
        );
    }

    #[tokio::test]
    async fn malformed_listing_is_reported() {
        let backend = ScriptedBackend::new().on_list_studies(Ok(json!({ "unexpected": true })));
        let mut screen = Screen::default();

        refresh_studies(&backend, &mut screen).await;

        assert!(matches!(screen.studies, StudyList::Failed(_)));
    }
}
