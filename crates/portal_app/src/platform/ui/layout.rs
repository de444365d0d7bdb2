use crate::platform::page::PageCommand;

use super::constants::PageBindings;
use super::render::loading_commands;

/// Commands that put the bound elements into their idle, empty state.
pub fn initial_commands(bindings: &PageBindings) -> Vec<PageCommand> {
    let mut commands = vec![
        PageCommand::SetHidden {
            target: bindings.file_name.clone(),
            hidden: true,
        },
        PageCommand::SetHidden {
            target: bindings.results_area.clone(),
            hidden: true,
        },
        PageCommand::SetHidden {
            target: bindings.cancel_button.clone(),
            hidden: true,
        },
    ];
    commands.extend(loading_commands(bindings, false));
    commands
}
