use super::backend::{
    Backend, GENERATE_REPORT_PATH, LIST_STUDIES_PATH, PROCESS_RECENT_PATH, UPLOAD_PATH,
    UPLOAD_STUDY_PATH,
};
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::model::{FileHandle, ReportRequest, StudyForm};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde_json::Value;

const USER_AGENT: &str = concat!("mirai-client/", env!("CARGO_PKG_VERSION"));
const DICOM_MIME: &str = "application/dicom";
const PDF_MIME: &str = "application/pdf";

/// [`Backend`] over HTTP against the analysis server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let base = config
            .base_url()
            .map_err(|err| TransportError::InvalidAddress {
                address: config.server_url.clone(),
                reason: err.to_string(),
            })?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    pub fn resolve(&self, location: &str) -> Result<Url, TransportError> {
        resolve_against(&self.base, location)
    }

    async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, TransportError> {
        let url = self.resolve(path)?;
        log::debug!("POST {url} (multipart)");
        let response = self.client.post(url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, TransportError> {
        let url = self.resolve(path)?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        read_json(response).await
    }
}

impl Backend for HttpBackend {
    async fn upload(&self, files: Vec<FileHandle>) -> Result<Value, TransportError> {
        let mut form = Form::new();
        for file in &files {
            form = form.part("file", file_part(file, DICOM_MIME).await?);
        }
        self.post_multipart(UPLOAD_PATH, form).await
    }

    async fn process_recent(&self) -> Result<Value, TransportError> {
        self.post_json(PROCESS_RECENT_PATH, &serde_json::json!({}))
            .await
    }

    async fn generate_report(&self, request: ReportRequest) -> Result<Value, TransportError> {
        self.post_json(GENERATE_REPORT_PATH, &request).await
    }

    async fn upload_study(&self, form: StudyForm) -> Result<Value, TransportError> {
        let mut multipart = Form::new();
        for (name, file) in form.parts() {
            multipart = multipart.part(name, file_part(file, PDF_MIME).await?);
        }
        self.post_multipart(UPLOAD_STUDY_PATH, multipart).await
    }

    async fn list_studies(&self) -> Result<Value, TransportError> {
        let url = self.resolve(LIST_STUDIES_PATH)?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.resolve(location)?;
        log::debug!("GET {url}");
        let response = ensure_success(self.client.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn file_part(file: &FileHandle, mime: &str) -> Result<Part, TransportError> {
    let bytes = file
        .read()
        .await
        .map_err(|source| TransportError::ReadFile {
            name: file.name().to_string(),
            source,
        })?;

    Ok(Part::bytes(bytes)
        .file_name(file.name().to_string())
        .mime_str(mime)?)
}

async fn ensure_success(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json(response: Response) -> Result<Value, TransportError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<Value>().await?)
}

/// Locators starting with `/` resolve against the server root, the way a
/// browser resolves them against the page origin.
fn resolve_against(base: &Url, location: &str) -> Result<Url, TransportError> {
    base.join(location)
        .map_err(|err| TransportError::InvalidAddress {
            address: location.to_string(),
            reason: err.to_string(),
        })
}
