use std::collections::VecDeque;
use std::sync::mpsc;

use portal_core::{update, AppState, AppViewModel, Effect, Msg};
use portal_engine::EngineHandle;
use portal_logging::portal_trace;

use super::effects::EffectRunner;
use super::page::{Page, PageCommand, PageEvent, ScrollBehavior, ScrollBlock};
use super::ui;
use super::ui::constants::PageBindings;

/// Mediates one upload → analyze → render cycle for the bound form.
///
/// Page events go in through [`handle_event`](Self::handle_event); page
/// commands come out of [`try_dequeue_command`](Self::try_dequeue_command).
/// Engine completions arrive on an internal channel and are applied when
/// commands are dequeued.
pub struct UploadFormController {
    bindings: PageBindings,
    state: AppState,
    commands: VecDeque<PageCommand>,
    rendered_revision: Option<u64>,
    msg_rx: mpsc::Receiver<Msg>,
    msg_tx: mpsc::Sender<Msg>,
    effects: EffectRunner,
}

impl UploadFormController {
    pub fn new(bindings: PageBindings, engine: EngineHandle) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(engine, msg_tx.clone());
        Self {
            bindings,
            state: AppState::new(),
            commands: VecDeque::new(),
            rendered_revision: None,
            msg_rx,
            msg_tx,
            effects,
        }
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        let msg = match event {
            PageEvent::FileInputChanged { target, files } if target == self.bindings.file_input => {
                Msg::FilesSelected(files.into_iter().map(|file| file.name).collect())
            }
            PageEvent::FormSubmitted { target, form } if target == self.bindings.form => {
                Msg::SubmitRequested(form)
            }
            PageEvent::ButtonClicked { target } if target == self.bindings.cancel_button => {
                Msg::CancelRequested
            }
            other => {
                portal_trace!("Ignoring event for unbound element: {:?}", other);
                return;
            }
        };
        let _ = self.msg_tx.send(msg);
    }

    pub fn try_dequeue_command(&mut self) -> Option<PageCommand> {
        self.process_pending_messages();
        self.commands.pop_front()
    }

    /// Applies every pending command to `page`; returns how many were applied.
    pub fn drain_into(&mut self, page: &mut dyn Page) -> usize {
        let mut applied = 0;
        while let Some(command) = self.try_dequeue_command() {
            page.apply(command);
            applied += 1;
        }
        applied
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            let view = state.view();
            self.commands.extend(ui::render::render(
                &self.bindings,
                &view,
                self.rendered_revision,
            ));
            if view.results.is_some() {
                self.rendered_revision = Some(view.results_revision);
            }
        }
        self.state = state;

        // Render commands for this dispatch are queued before any effect runs,
        // so loading state is visible before the request leaves.
        let mut engine_effects = Vec::new();
        for effect in effects {
            match effect {
                Effect::ShowAlert { message } => {
                    self.commands.push_back(PageCommand::Alert { message });
                }
                Effect::ScrollResultsIntoView => {
                    self.commands.push_back(PageCommand::ScrollIntoView {
                        target: self.bindings.results_area.clone(),
                        behavior: ScrollBehavior::Smooth,
                        block: ScrollBlock::Start,
                    });
                }
                engine_effect => engine_effects.push(engine_effect),
            }
        }
        if !engine_effects.is_empty() {
            self.effects.enqueue(engine_effects);
        }
    }
}
