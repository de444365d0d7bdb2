use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use portal_core::{
    AnalysisResponse, Effect, FailureReason, FormData, FormField, Msg, RequestId,
    PROVIDER_KEY_FIELD,
};
use portal_engine::{
    AnalyzeError, AnalyzeOutput, AnalyzeRequest, EngineEvent, EngineHandle, RequestPart,
};
use portal_logging::{portal_debug, portal_error, portal_info, portal_warn};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Executes engine effects and feeds engine completions back as [`Msg`]s.
pub struct EffectRunner {
    engine: EngineHandle,
    running: Arc<AtomicBool>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self {
            engine,
            running: Arc::new(AtomicBool::new(true)),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitForm { request_id, form } => {
                    portal_info!(
                        "SubmitForm request_id={} fields=[{}]",
                        request_id,
                        describe_form(&form)
                    );
                    self.engine.submit(request_id, map_form(form));
                }
                Effect::CancelRequest { request_id } => {
                    portal_info!("CancelRequest request_id={}", request_id);
                    self.engine.cancel(request_id);
                }
                Effect::ShowAlert { .. } | Effect::ScrollResultsIntoView => {
                    portal_debug!("Page effect reached the engine runner: {:?}", effect);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        let running = self.running.clone();
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let Some(event) = engine.recv_timeout(EVENT_POLL_INTERVAL) else {
                    continue;
                };
                match event {
                    EngineEvent::Progress(progress) => {
                        portal_debug!(
                            "request_id={} stage={:?} bytes={:?}",
                            progress.request_id,
                            progress.stage,
                            progress.bytes
                        );
                    }
                    EngineEvent::RequestCompleted { request_id, result } => {
                        if msg_tx.send(completion_msg(request_id, result)).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Turns an engine completion into the message the core understands.
///
/// Bodies that decode as JSON but not as a payload object are transport
/// failures, same as network errors.
pub fn completion_msg(
    request_id: RequestId,
    result: Result<AnalyzeOutput, AnalyzeError>,
) -> Msg {
    match result {
        Ok(output) => match AnalysisResponse::from_json(output.body) {
            Ok(response) => {
                if response.is_success() {
                    portal_info!(
                        "request_id={} analyzed (http {}, {} bytes, provider {:?}, {} jobs)",
                        request_id,
                        output.http_status,
                        output.byte_len,
                        response.provider_used,
                        response.jobs.len()
                    );
                } else {
                    portal_warn!(
                        "request_id={} analysis failed (http {}): status={:?} error={:?}",
                        request_id,
                        output.http_status,
                        response.status,
                        response.error
                    );
                }
                Msg::AnalysisReceived {
                    request_id,
                    response,
                }
            }
            Err(err) => {
                portal_error!("request_id={} unusable response: {}", request_id, err);
                Msg::AnalysisFailed {
                    request_id,
                    reason: FailureReason::Transport {
                        detail: err.to_string(),
                    },
                }
            }
        },
        Err(err) if err.is_cancelled() => {
            portal_info!("request_id={} cancelled", request_id);
            Msg::AnalysisFailed {
                request_id,
                reason: FailureReason::Cancelled,
            }
        }
        Err(err) => {
            portal_error!("request_id={} failed: {}", request_id, err);
            Msg::AnalysisFailed {
                request_id,
                reason: FailureReason::Transport {
                    detail: err.to_string(),
                },
            }
        }
    }
}

fn map_form(form: FormData) -> AnalyzeRequest {
    let parts = form
        .fields
        .into_iter()
        .map(|field| match field {
            FormField::Text { name, value } => RequestPart::Text { name, value },
            FormField::File { name, file } => RequestPart::File {
                name,
                file_name: file.file_name,
                content_type: file.content_type,
                bytes: file.bytes,
            },
        })
        .collect();
    AnalyzeRequest { parts }
}

fn describe_form(form: &FormData) -> String {
    form.fields
        .iter()
        .map(|field| match field {
            FormField::Text { name, value } if name == PROVIDER_KEY_FIELD => {
                format!("{name}={}", portal_logging::redact(value))
            }
            FormField::Text { name, value } => format!("{name}={value}"),
            FormField::File { name, file } => {
                format!("{name}={} ({} B)", file.file_name, file.bytes.len())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
