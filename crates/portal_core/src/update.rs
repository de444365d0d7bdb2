use crate::effect::{ANALYSIS_FAILED_PREFIX, GENERIC_FAILURE_MESSAGE};
use crate::{AppState, Effect, FailureReason, Msg, ResultsView};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(names) => {
            // An empty selection keeps whatever preview is already shown.
            if let Some(first) = names.into_iter().next() {
                state.select_file(first);
            }
            Vec::new()
        }
        Msg::SubmitRequested(form) => {
            if state.is_loading() {
                return (state, Vec::new());
            }
            state.hide_results();
            let request_id = state.begin_request();
            vec![Effect::SubmitForm { request_id, form }]
        }
        Msg::CancelRequested => match state.in_flight() {
            Some(request_id) => vec![Effect::CancelRequest { request_id }],
            None => Vec::new(),
        },
        Msg::AnalysisReceived {
            request_id,
            response,
        } => {
            if !state.finish_request(request_id) {
                return (state, Vec::new());
            }
            if response.is_success() {
                state.show_results(ResultsView::from_response(&response));
                vec![Effect::ScrollResultsIntoView]
            } else {
                vec![Effect::ShowAlert {
                    message: format!("{ANALYSIS_FAILED_PREFIX}{}", response.failure_message()),
                }]
            }
        }
        Msg::AnalysisFailed { request_id, reason } => {
            if !state.finish_request(request_id) {
                return (state, Vec::new());
            }
            match reason {
                FailureReason::Transport { .. } => vec![Effect::ShowAlert {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }],
                FailureReason::Cancelled => Vec::new(),
            }
        }
    };

    (state, effects)
}
