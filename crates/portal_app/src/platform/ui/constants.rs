use crate::platform::page::ElementId;

pub const FORM_UPLOAD: ElementId = ElementId::new("uploadForm");
pub const INPUT_FILE: ElementId = ElementId::new("dropzone-file");
pub const LABEL_FILE_NAME: ElementId = ElementId::new("fileName");
pub const PANEL_RESULTS: ElementId = ElementId::new("resultsArea");
pub const BUTTON_SUBMIT: ElementId = ElementId::new("submitBtn");
pub const LABEL_BUTTON_TEXT: ElementId = ElementId::new("btnText");
pub const ICON_BUTTON_IDLE: ElementId = ElementId::new("btnIcon");
pub const ICON_BUTTON_SPINNER: ElementId = ElementId::new("btnSpinner");
pub const BUTTON_CANCEL: ElementId = ElementId::new("cancelBtn");
pub const CONTAINER_PROFILE_STATS: ElementId = ElementId::new("profileStats");
pub const CONTAINER_SKILL_TAGS: ElementId = ElementId::new("skillTags");
pub const CONTAINER_ADVICE: ElementId = ElementId::new("adviceContent");
pub const CONTAINER_JOBS: ElementId = ElementId::new("jobsList");

/// Elements the controller is bound to, injected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    pub form: ElementId,
    pub file_input: ElementId,
    pub file_name: ElementId,
    pub results_area: ElementId,
    pub submit_button: ElementId,
    pub button_text: ElementId,
    pub button_icon: ElementId,
    pub button_spinner: ElementId,
    pub cancel_button: ElementId,
    pub profile_stats: ElementId,
    pub skill_tags: ElementId,
    pub advice_content: ElementId,
    pub jobs_list: ElementId,
}

impl Default for PageBindings {
    fn default() -> Self {
        Self {
            form: FORM_UPLOAD,
            file_input: INPUT_FILE,
            file_name: LABEL_FILE_NAME,
            results_area: PANEL_RESULTS,
            submit_button: BUTTON_SUBMIT,
            button_text: LABEL_BUTTON_TEXT,
            button_icon: ICON_BUTTON_IDLE,
            button_spinner: ICON_BUTTON_SPINNER,
            cancel_button: BUTTON_CANCEL,
            profile_stats: CONTAINER_PROFILE_STATS,
            skill_tags: CONTAINER_SKILL_TAGS,
            advice_content: CONTAINER_ADVICE,
            jobs_list: CONTAINER_JOBS,
        }
    }
}
