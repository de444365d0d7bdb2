use crate::view_model::{AppViewModel, ResultsView};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    file_name: Option<String>,
    in_flight: Option<RequestId>,
    results: Option<ResultsView>,
    results_visible: bool,
    results_revision: u64,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            file_name: self.file_name.clone(),
            loading: self.is_loading(),
            results_visible: self.results_visible,
            results: self.results.clone(),
            results_revision: self.results_revision,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_file(&mut self, name: String) {
        self.file_name = Some(name);
        self.dirty = true;
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Clears loading state if `request_id` is the in-flight request.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.dirty = true;
        true
    }

    pub(crate) fn hide_results(&mut self) {
        if self.results_visible {
            self.results_visible = false;
            self.dirty = true;
        }
    }

    pub(crate) fn show_results(&mut self, results: ResultsView) {
        self.results = Some(results);
        self.results_revision += 1;
        self.results_visible = true;
        self.dirty = true;
    }
}
