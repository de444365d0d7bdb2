//! Portal core: pure upload/analyze state machine and view-model helpers.
mod effect;
mod form;
mod msg;
mod payload;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ANALYSIS_FAILED_PREFIX, GENERIC_FAILURE_MESSAGE};
pub use form::{FileUpload, FormData, FormField, FILE_FIELD, PROVIDER_KEY_FIELD};
pub use msg::{FailureReason, Msg};
pub use payload::{
    Advice, AnalysisResponse, Education, JobListing, PayloadError, Profile, SUCCESS_STATUS,
    UNKNOWN_ERROR_MESSAGE,
};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{
    match_tier, parse_leading_int, source_kind, split_title, AdviceView, AppViewModel,
    JobCardView, MatchTier, ResultsView, SourceKind, StatsView, CAREER_ADVICE_PLACEHOLDER,
    COMPANY_PLACEHOLDER, EDUCATION_PLACEHOLDER, EXPERIENCE_PLACEHOLDER, HIGH_MATCH_THRESHOLD,
    LEVEL_PLACEHOLDER, MAX_ADVICE_ITEMS, MAX_REQUIREMENT_TAGS, SCORE_PLACEHOLDER,
    UNSPECIFIED_PLACEHOLDER,
};
