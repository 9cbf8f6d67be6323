use crate::error::TransportError;
use crate::model::{FileHandle, ReportRequest, StudyForm};
use serde_json::Value;
use std::future::Future;

pub const UPLOAD_PATH: &str = "/upload";
pub const PROCESS_RECENT_PATH: &str = "/process_recent_dicoms";
pub const GENERATE_REPORT_PATH: &str = "/generate_report_pdf";
pub const UPLOAD_STUDY_PATH: &str = "/upload_pdf";
pub const LIST_STUDIES_PATH: &str = "/ver_estudios_pdf";

/// The analysis server as seen by the workflows.
///
/// JSON endpoints hand back the decoded body of any 2xx response; deciding
/// whether that body means success is left to the caller. Everything else
/// surfaces as a [`TransportError`].
pub trait Backend: Send + Sync {
    /// `POST /upload`, one `file` part per handle.
    fn upload(
        &self,
        files: Vec<FileHandle>,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// `POST /process_recent_dicoms` with an empty JSON object.
    fn process_recent(&self) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// `POST /generate_report_pdf`.
    fn generate_report(
        &self,
        request: ReportRequest,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// `POST /upload_pdf` with the filled `pdf1`/`pdf2` parts.
    fn upload_study(
        &self,
        form: StudyForm,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// `GET /ver_estudios_pdf`.
    fn list_studies(&self) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// Raw bytes behind a server-relative or absolute locator (previews,
    /// reports).
    fn fetch_bytes(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}
