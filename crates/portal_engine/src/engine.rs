use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use portal_logging::{portal_debug, portal_info, portal_warn};
use tokio_util::sync::CancellationToken;

use crate::client::{AnalyzeClient, ChannelProgressSink, ClientSettings, ReqwestAnalyzeClient};
use crate::{AnalyzeError, AnalyzeRequest, EngineEvent, FailureKind, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] AnalyzeError),
}

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: AnalyzeRequest,
    },
    Cancel {
        request_id: RequestId,
    },
}

type TokenMap = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Handle to the background thread that owns the async runtime.
///
/// Clones share the same engine. The thread exits once every handle is gone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestAnalyzeClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn AnalyzeClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("portal-engine".to_string())
            .spawn(move || {
                let tokens: TokenMap = Arc::new(Mutex::new(HashMap::new()));
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Submit {
                            request_id,
                            request,
                        } => {
                            let token = CancellationToken::new();
                            if let Ok(mut map) = tokens.lock() {
                                map.insert(request_id, token.clone());
                            }
                            runtime.spawn(run_request(
                                client.clone(),
                                request_id,
                                request,
                                token,
                                tokens.clone(),
                                event_tx.clone(),
                            ));
                        }
                        EngineCommand::Cancel { request_id } => {
                            let token = tokens
                                .lock()
                                .ok()
                                .and_then(|map| map.get(&request_id).cloned());
                            match token {
                                Some(token) => {
                                    portal_info!("Cancelling request_id={}", request_id);
                                    token.cancel();
                                }
                                None => portal_debug!(
                                    "Cancel for request_id={} ignored; not in flight",
                                    request_id
                                ),
                            }
                        }
                    }
                }
                portal_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, request_id: RequestId, request: AnalyzeRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            portal_warn!("Engine stopped; request_id={} dropped", request_id);
        }
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn run_request(
    client: Arc<dyn AnalyzeClient>,
    request_id: RequestId,
    request: AnalyzeRequest,
    token: CancellationToken,
    tokens: TokenMap,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let sink = ChannelProgressSink::new(event_tx.clone());
    let result = tokio::select! {
        _ = token.cancelled() => Err(AnalyzeError::new(FailureKind::Cancelled, "request cancelled")),
        result = client.analyze(request_id, &request, &sink) => result,
    };
    if let Ok(mut map) = tokens.lock() {
        map.remove(&request_id);
    }
    let _ = event_tx.send(EngineEvent::RequestCompleted { request_id, result });
}
