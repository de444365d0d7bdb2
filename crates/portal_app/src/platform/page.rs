//! Page contract between the controller and whatever hosts the markup.
//!
//! The controller never touches elements directly: it emits [`PageCommand`]s
//! addressed by [`ElementId`] and receives [`PageEvent`]s. [`MemoryPage`] is a
//! host that keeps element state in memory, used by the CLI and by tests.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use portal_core::FormData;

use super::ui::constants::PageBindings;
use super::ui::layout;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Cow<'static, str>);

impl ElementId {
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn owned(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    SetText {
        target: ElementId,
        text: String,
    },
    SetHidden {
        target: ElementId,
        hidden: bool,
    },
    SetDisabled {
        target: ElementId,
        disabled: bool,
    },
    AddClasses {
        target: ElementId,
        classes: Vec<&'static str>,
    },
    RemoveClasses {
        target: ElementId,
        classes: Vec<&'static str>,
    },
    /// `html` is produced by the fragment renderer and is already escaped.
    SetInnerHtml {
        target: ElementId,
        html: String,
    },
    ScrollIntoView {
        target: ElementId,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
    /// Blocking notification shown to the user.
    Alert {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    FileInputChanged {
        target: ElementId,
        files: Vec<SelectedFile>,
    },
    /// The host has already suppressed default navigation.
    FormSubmitted {
        target: ElementId,
        form: FormData,
    },
    ButtonClicked {
        target: ElementId,
    },
}

pub trait Page {
    fn apply(&mut self, command: PageCommand);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub hidden: bool,
    pub disabled: bool,
    pub classes: BTreeSet<String>,
    pub inner_html: String,
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: HashMap<ElementId, ElementState>,
    alerts: Vec<String>,
    scrolls: Vec<(ElementId, ScrollBehavior, ScrollBlock)>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page in the state the static markup starts in.
    pub fn with_initial_layout(bindings: &PageBindings) -> Self {
        let mut page = Self::new();
        for command in layout::initial_commands(bindings) {
            page.apply(command);
        }
        page
    }

    pub fn element(&self, id: &ElementId) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn is_hidden(&self, id: &ElementId) -> bool {
        self.element(id).is_some_and(|element| element.hidden)
    }

    pub fn inner_html(&self, id: &ElementId) -> &str {
        self.element(id)
            .map(|element| element.inner_html.as_str())
            .unwrap_or_default()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn scrolls(&self) -> &[(ElementId, ScrollBehavior, ScrollBlock)] {
        &self.scrolls
    }
}

impl Page for MemoryPage {
    fn apply(&mut self, command: PageCommand) {
        match command {
            PageCommand::SetText { target, text } => {
                self.elements.entry(target).or_default().text = text;
            }
            PageCommand::SetHidden { target, hidden } => {
                self.elements.entry(target).or_default().hidden = hidden;
            }
            PageCommand::SetDisabled { target, disabled } => {
                self.elements.entry(target).or_default().disabled = disabled;
            }
            PageCommand::AddClasses { target, classes } => {
                let element = self.elements.entry(target).or_default();
                element
                    .classes
                    .extend(classes.into_iter().map(str::to_string));
            }
            PageCommand::RemoveClasses { target, classes } => {
                let element = self.elements.entry(target).or_default();
                for class in classes {
                    element.classes.remove(class);
                }
            }
            PageCommand::SetInnerHtml { target, html } => {
                self.elements.entry(target).or_default().inner_html = html;
            }
            PageCommand::ScrollIntoView {
                target,
                behavior,
                block,
            } => self.scrolls.push((target, behavior, block)),
            PageCommand::Alert { message } => self.alerts.push(message),
        }
    }
}
