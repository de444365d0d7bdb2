#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked files in the file input (names in selection order).
    FilesSelected(Vec<String>),
    /// User submitted the upload form.
    SubmitRequested(crate::FormData),
    /// User asked to abort the in-flight analysis.
    CancelRequested,
    /// Engine decoded a response body for a request.
    AnalysisReceived {
        request_id: crate::RequestId,
        response: crate::AnalysisResponse,
    },
    /// Engine gave up on a request without a usable body.
    AnalysisFailed {
        request_id: crate::RequestId,
        reason: FailureReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Network, timeout or decoding failure; `detail` is for diagnostics only.
    Transport { detail: String },
    Cancelled,
}
