use portal_core::{AppViewModel, ResultsView};

use crate::platform::page::PageCommand;

use super::constants::PageBindings;
use super::html;

pub const BUTTON_LABEL_IDLE: &str = "Analyze Profile";
pub const BUTTON_LABEL_LOADING: &str = "Analyzing...";
const BUSY_CLASSES: [&str; 2] = ["opacity-75", "cursor-not-allowed"];

/// Commands that bring the page in line with `view`.
///
/// `rendered_revision` is the results revision already on the page; the four
/// containers are only rebuilt when `view` carries a different one.
pub fn render(
    bindings: &PageBindings,
    view: &AppViewModel,
    rendered_revision: Option<u64>,
) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    if let Some(file_name) = &view.file_name {
        cmds.push(PageCommand::SetText {
            target: bindings.file_name.clone(),
            text: file_name.clone(),
        });
        cmds.push(PageCommand::SetHidden {
            target: bindings.file_name.clone(),
            hidden: false,
        });
    }

    cmds.extend(loading_commands(bindings, view.loading));
    cmds.push(PageCommand::SetHidden {
        target: bindings.cancel_button.clone(),
        hidden: !view.loading,
    });

    if let Some(results) = &view.results {
        if rendered_revision != Some(view.results_revision) {
            cmds.extend(results_commands(bindings, results));
        }
    }
    cmds.push(PageCommand::SetHidden {
        target: bindings.results_area.clone(),
        hidden: !view.results_visible,
    });

    cmds
}

/// Absolute presentation of the submit button for `loading`.
///
/// Every command sets a value rather than toggling one, so applying the same
/// state twice is a no-op and `false` always restores the idle look.
pub fn loading_commands(bindings: &PageBindings, loading: bool) -> Vec<PageCommand> {
    let label = if loading {
        BUTTON_LABEL_LOADING
    } else {
        BUTTON_LABEL_IDLE
    };
    let classes = if loading {
        PageCommand::AddClasses {
            target: bindings.submit_button.clone(),
            classes: BUSY_CLASSES.to_vec(),
        }
    } else {
        PageCommand::RemoveClasses {
            target: bindings.submit_button.clone(),
            classes: BUSY_CLASSES.to_vec(),
        }
    };

    vec![
        PageCommand::SetText {
            target: bindings.button_text.clone(),
            text: label.to_string(),
        },
        PageCommand::SetHidden {
            target: bindings.button_icon.clone(),
            hidden: loading,
        },
        PageCommand::SetHidden {
            target: bindings.button_spinner.clone(),
            hidden: !loading,
        },
        PageCommand::SetDisabled {
            target: bindings.submit_button.clone(),
            disabled: loading,
        },
        classes,
    ]
}

fn results_commands(bindings: &PageBindings, results: &ResultsView) -> Vec<PageCommand> {
    vec![
        PageCommand::SetInnerHtml {
            target: bindings.profile_stats.clone(),
            html: html::profile_stats(&results.stats),
        },
        PageCommand::SetInnerHtml {
            target: bindings.skill_tags.clone(),
            html: html::skill_tags(&results.skills),
        },
        PageCommand::SetInnerHtml {
            target: bindings.advice_content.clone(),
            html: html::advice_content(&results.advice),
        },
        PageCommand::SetInnerHtml {
            target: bindings.jobs_list.clone(),
            html: html::jobs_list(&results.jobs),
        },
    ]
}
