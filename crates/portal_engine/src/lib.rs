//! Portal engine: multipart upload, response decoding and request lifecycle.
mod client;
mod engine;
mod types;

pub use client::{
    AnalyzeClient, ChannelProgressSink, ClientSettings, ProgressSink, ReqwestAnalyzeClient,
    ANALYZE_PATH,
};
pub use engine::{EngineError, EngineHandle};
pub use types::{
    AnalyzeError, AnalyzeOutput, AnalyzeRequest, EngineEvent, FailureKind, RequestId,
    RequestPart, RequestProgress, Stage,
};
