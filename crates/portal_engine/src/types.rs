use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uploading,
    Decoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestProgress {
    pub request_id: RequestId,
    pub stage: Stage,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Progress(RequestProgress),
    RequestCompleted {
        request_id: RequestId,
        result: Result<AnalyzeOutput, AnalyzeError>,
    },
}

/// Multipart body of one analysis request, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzeRequest {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Decoded response. Any HTTP status whose body is JSON lands here.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOutput {
    pub http_status: u16,
    pub body: serde_json::Value,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == FailureKind::Cancelled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidForm,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidForm => write!(f, "invalid form"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "response is not json"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
