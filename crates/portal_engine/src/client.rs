use std::time::Duration;

use futures_util::StreamExt;
use portal_logging::{portal_debug, portal_info};
use reqwest::multipart::{Form, Part};

use crate::{
    AnalyzeError, AnalyzeOutput, AnalyzeRequest, EngineEvent, FailureKind, RequestId,
    RequestPart, RequestProgress, Stage,
};

/// Path of the analysis endpoint, relative to the page origin.
pub const ANALYZE_PATH: &str = "/api/candidate/analyze";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request budget, upload and body read included.
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(300),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait AnalyzeClient: Send + Sync {
    async fn analyze(
        &self,
        request_id: RequestId,
        request: &AnalyzeRequest,
        sink: &dyn ProgressSink,
    ) -> Result<AnalyzeOutput, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzeClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAnalyzeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AnalyzeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn endpoint(&self) -> Result<reqwest::Url, AnalyzeError> {
        reqwest::Url::parse(&self.settings.base_url)
            .and_then(|base| base.join(ANALYZE_PATH))
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> AnalyzeError {
        AnalyzeError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

fn build_form(request: &AnalyzeRequest) -> Result<Form, AnalyzeError> {
    let mut form = Form::new();
    for part in &request.parts {
        form = match part {
            RequestPart::Text { name, value } => form.text(name.clone(), value.clone()),
            RequestPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut file_part = Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(content_type) = content_type {
                    file_part = file_part
                        .mime_str(content_type)
                        .map_err(|err| AnalyzeError::new(FailureKind::InvalidForm, err.to_string()))?;
                }
                form.part(name.clone(), file_part)
            }
        };
    }
    Ok(form)
}

#[async_trait::async_trait]
impl AnalyzeClient for ReqwestAnalyzeClient {
    async fn analyze(
        &self,
        request_id: RequestId,
        request: &AnalyzeRequest,
        sink: &dyn ProgressSink,
    ) -> Result<AnalyzeOutput, AnalyzeError> {
        let url = self.endpoint()?;
        let form = build_form(request)?;

        sink.emit(EngineEvent::Progress(RequestProgress {
            request_id,
            stage: Stage::Uploading,
            bytes: None,
        }));
        portal_info!("POST {} request_id={}", url, request_id);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Error statuses still carry a JSON body the caller may want to show.
        let status = response.status();
        portal_debug!("request_id={} status={}", request_id, status);

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        sink.emit(EngineEvent::Progress(RequestProgress {
            request_id,
            stage: Stage::Decoding,
            bytes: Some(bytes.len() as u64),
        }));

        let body = serde_json::from_slice(&bytes)
            .map_err(|err| AnalyzeError::new(FailureKind::Decode, err.to_string()))?;

        Ok(AnalyzeOutput {
            http_status: status.as_u16(),
            body,
            byte_len: bytes.len() as u64,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}
