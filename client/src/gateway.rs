use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

const PDF_MIME: &str = "application/pdf";

/// The remote calls the controller depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload_pdf(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError>;

    async fn ask(&self, request: &AskRequest) -> Result<AnswerResult, ClientError>;

    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ClientError>;
}

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload_pdf(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        log::info!("Uploading {} ({} bytes)", file.name, file.bytes.len());

        let response = self
            .client
            .post(self.config.endpoint("upload_pdf"))
            .multipart(form)
            .send()
            .await?;

        let upload: UploadResponse = decode(response).await?;
        if let Some(message) = &upload.message {
            log::debug!("Upload acknowledged: {}", message);
        }
        Ok(upload)
    }

    async fn ask(&self, request: &AskRequest) -> Result<AnswerResult, ClientError> {
        log::info!(
            "Asking backend (file_id: {})",
            request.file_id.as_ref().map(FileId::as_str).unwrap_or("none")
        );

        let response = self
            .client
            .post(self.config.endpoint("ask"))
            .json(request)
            .send()
            .await?;

        decode(response).await
    }

    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ClientError> {
        let response = self
            .client
            .get(self.config.endpoint("logs"))
            .send()
            .await?;

        decode(response).await
    }
}

/// Splits a response into the success payload, an application error carrying
/// the server's `error` text, or a transport error when the body is unusable.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    let error_body: ErrorBody = serde_json::from_slice(&body)?;
    let message = error_body.error.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    log::warn!("Backend returned {}: {}", status, message);
    Err(ClientError::application(status.as_u16(), message))
}
