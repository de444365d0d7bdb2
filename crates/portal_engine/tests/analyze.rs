use std::sync::{Arc, Mutex};
use std::time::Duration;

use portal_engine::{
    AnalyzeClient, AnalyzeRequest, ClientSettings, EngineEvent, FailureKind, ProgressSink,
    RequestPart, RequestProgress, ReqwestAnalyzeClient, Stage, ANALYZE_PATH,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn resume_request() -> AnalyzeRequest {
    AnalyzeRequest {
        parts: vec![
            RequestPart::File {
                name: "file".to_string(),
                file_name: "resume.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: b"%PDF-1.4 fake".to_vec(),
            },
            RequestPart::Text {
                name: "nebius_key".to_string(),
                value: "key-123".to_string(),
            },
        ],
    }
}

fn client_for(server: &MockServer) -> ReqwestAnalyzeClient {
    ReqwestAnalyzeClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .unwrap()
}

#[tokio::test]
async fn posts_multipart_and_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("filename=\"resume.pdf\""))
        .and(body_string_contains("name=\"nebius_key\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "jobs": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sink = TestSink::new();

    let output = client.analyze(1, &resume_request(), &sink).await.expect("analyze ok");
    assert_eq!(output.http_status, 200);
    assert_eq!(output.body, json!({"status": "success", "jobs": []}));

    let stages = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(RequestProgress { stage, .. }) => Some(stage),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(stages, vec![Stage::Uploading, Stage::Decoding]);
}

#[tokio::test]
async fn error_status_with_json_body_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "failed",
            "error": "bad file"
        })))
        .mount(&server)
        .await;

    let output = client_for(&server)
        .analyze(2, &resume_request(), &TestSink::new())
        .await
        .expect("json body is usable");
    assert_eq!(output.http_status, 422);
    assert_eq!(output.body["error"], "bad file");
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw("<html>Internal Server Error</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(3, &resume_request(), &TestSink::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({"status": "success"})),
        )
        .mount(&server)
        .await;

    let client = ReqwestAnalyzeClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .unwrap();

    let err = client
        .analyze(4, &resume_request(), &TestSink::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("{\"status\":\"success\"}"),
        )
        .mount(&server)
        .await;

    let client = ReqwestAnalyzeClient::new(ClientSettings {
        base_url: server.uri(),
        max_bytes: 8,
        ..ClientSettings::default()
    })
    .unwrap();

    let err = client
        .analyze(5, &resume_request(), &TestSink::new())
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 8,
            actual: Some(20)
        }
    );
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let client = ReqwestAnalyzeClient::new(ClientSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: Duration::from_millis(500),
        ..ClientSettings::default()
    })
    .unwrap();

    let err = client
        .analyze(6, &resume_request(), &TestSink::new())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}

#[tokio::test]
async fn invalid_content_type_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let request = AnalyzeRequest {
        parts: vec![RequestPart::File {
            name: "file".to_string(),
            file_name: "resume.pdf".to_string(),
            content_type: Some("not a mime type".to_string()),
            bytes: Vec::new(),
        }],
    };

    let err = client_for(&server)
        .analyze(7, &request, &TestSink::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidForm);
}
