//! Scripted in-memory [`Backend`] for workflow tests.

use super::backend::Backend;
use crate::error::TransportError;
use crate::model::{FileHandle, ReportRequest, StudyForm};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

pub type Reply = Result<Value, TransportError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(Vec<String>),
    ProcessRecent,
    GenerateReport(ReportRequest),
    UploadStudy(Vec<(&'static str, String)>),
    ListStudies,
    FetchBytes(String),
}

#[derive(Default)]
pub struct ScriptedBackend {
    uploads: Mutex<VecDeque<Reply>>,
    batches: Mutex<VecDeque<Reply>>,
    reports: Mutex<VecDeque<Reply>>,
    studies: Mutex<VecDeque<Reply>>,
    listings: Mutex<VecDeque<Reply>>,
    downloads: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    calls: Mutex<Vec<Call>>,
}

pub fn server_error(status: u16, body: &str) -> TransportError {
    TransportError::Status {
        status,
        body: body.to_string(),
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, TransportError>>>) -> Result<T, TransportError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(server_error(503, "no scripted reply")))
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_upload(self, reply: Reply) -> Self {
        self.uploads.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_process(self, reply: Reply) -> Self {
        self.batches.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_report(self, reply: Reply) -> Self {
        self.reports.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_study_upload(self, reply: Reply) -> Self {
        self.studies.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_list_studies(self, reply: Reply) -> Self {
        self.listings.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_fetch(self, reply: Result<Vec<u8>, TransportError>) -> Self {
        self.downloads.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn report_requests(&self) -> Vec<ReportRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::GenerateReport(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Backend for ScriptedBackend {
    async fn upload(&self, files: Vec<FileHandle>) -> Reply {
        self.record(Call::Upload(
            files.iter().map(|file| file.name().to_string()).collect(),
        ));
        next(&self.uploads)
    }

    async fn process_recent(&self) -> Reply {
        self.record(Call::ProcessRecent);
        next(&self.batches)
    }

    async fn generate_report(&self, request: ReportRequest) -> Reply {
        self.record(Call::GenerateReport(request));
        next(&self.reports)
    }

    async fn upload_study(&self, form: StudyForm) -> Reply {
        self.record(Call::UploadStudy(
            form.parts()
                .map(|(part, file)| (part, file.name().to_string()))
                .collect(),
        ));
        next(&self.studies)
    }

    async fn list_studies(&self) -> Reply {
        self.record(Call::ListStudies);
        next(&self.listings)
    }

    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, TransportError> {
        self.record(Call::FetchBytes(location.to_string()));
        next(&self.downloads)
    }
}
