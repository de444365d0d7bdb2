pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";
pub const ANALYSIS_FAILED_PREFIX: &str = "Analysis failed: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitForm {
        request_id: crate::RequestId,
        form: crate::FormData,
    },
    CancelRequest {
        request_id: crate::RequestId,
    },
    ShowAlert {
        message: String,
    },
    ScrollResultsIntoView,
}
