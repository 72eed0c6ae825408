//! Integration tests for the generation client lifecycle against a fake
//! remote service.
//!
//! A small axum router stands in for the generation endpoint so the full
//! submit → poll → download path is exercised over real HTTP, with the
//! polling cadence compressed to milliseconds.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use reelkit_core::questionnaire::ConsistencyMode;
use reelkit_core::translator::GenerationRequest;
use reelkit_veo::client::VeoClient;
use reelkit_veo::config::VeoConfig;

const CLIP_BYTES: &str = "clip-bytes";

// ---------------------------------------------------------------------------
// Test harness
// ---------------------------------------------------------------------------

/// Bind a fake service and return its address plus the spawned router's
/// submit/poll counters.
struct FakeService {
    addr: SocketAddr,
    submits: Arc<AtomicU32>,
    polls: Arc<AtomicU32>,
}

/// What the fake submission endpoint answers.
#[derive(Clone)]
enum SubmitBehavior {
    /// Immediate `videoUrl` result.
    Immediate,
    /// `operationId` result; polling proceeds per `PollBehavior`.
    Operation,
    /// Empty JSON object (unrecognized shape).
    Unrecognized,
    /// Status 500 for the first `n` submissions, then an operation id.
    FailFirst(u32),
    /// Status 500 on every submission.
    AlwaysServerError,
    /// Status 400 on every submission.
    AlwaysBadRequest,
    /// Immediate result pointing at a URL that does not exist.
    ImmediateMissingArtifact,
}

/// What the fake operations endpoint answers.
#[derive(Clone)]
enum PollBehavior {
    /// `done: false` for the first `n` polls, then done with a video URL.
    PendingFirst(u32),
    /// `done: false` forever.
    NeverDone,
    /// `done: true` with an error payload.
    DoneWithError,
}

async fn spawn_fake_service(submit: SubmitBehavior, poll: PollBehavior) -> FakeService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let submits = Arc::new(AtomicU32::new(0));
    let polls = Arc::new(AtomicU32::new(0));
    let video_url = format!("http://{addr}/files/clip.mp4");

    let submit_handler = {
        let submits = submits.clone();
        let video_url = video_url.clone();
        move || {
            let submits = submits.clone();
            let video_url = video_url.clone();
            let submit = submit.clone();
            async move {
                let count = submits.fetch_add(1, Ordering::SeqCst);
                let (status, body): (u16, Value) = match submit {
                    SubmitBehavior::Immediate => (
                        200,
                        json!({ "videoUrl": video_url, "metadata": { "seed": 7 } }),
                    ),
                    SubmitBehavior::Operation => (200, json!({ "operationId": "op-1" })),
                    SubmitBehavior::Unrecognized => (200, json!({})),
                    SubmitBehavior::FailFirst(n) if count < n => {
                        (500, json!({ "error": "transient" }))
                    }
                    SubmitBehavior::FailFirst(_) => (200, json!({ "operationId": "op-1" })),
                    SubmitBehavior::AlwaysServerError => (500, json!({ "error": "down" })),
                    SubmitBehavior::AlwaysBadRequest => (400, json!({ "error": "bad prompt" })),
                    SubmitBehavior::ImmediateMissingArtifact => (
                        200,
                        json!({ "videoUrl": format!("http://{addr}/files/missing.mp4") }),
                    ),
                };
                (axum::http::StatusCode::from_u16(status).unwrap(), Json(body))
            }
        }
    };

    let poll_handler = {
        let polls = polls.clone();
        move |Path(_id): Path<String>| {
            let polls = polls.clone();
            let video_url = video_url.clone();
            let poll = poll.clone();
            async move {
                let count = polls.fetch_add(1, Ordering::SeqCst);
                let body = match poll {
                    PollBehavior::PendingFirst(n) if count < n => json!({ "done": false }),
                    PollBehavior::PendingFirst(_) => {
                        json!({ "done": true, "response": { "videoUrl": video_url } })
                    }
                    PollBehavior::NeverDone => json!({ "done": false }),
                    PollBehavior::DoneWithError => {
                        json!({ "done": true, "error": { "message": "safety filter rejected" } })
                    }
                };
                Json(body)
            }
        }
    };

    let router = Router::new()
        .route("/v1beta/models/veo-3:generateVideo", post(submit_handler))
        .route("/v1beta/models/operations/{id}", get(poll_handler))
        .route("/files/clip.mp4", get(|| async { CLIP_BYTES }));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    FakeService {
        addr,
        submits,
        polls,
    }
}

fn test_config(addr: SocketAddr, test_name: &str) -> VeoConfig {
    let base: PathBuf = std::env::temp_dir().join(format!("reelkit-veo-it-{test_name}"));
    VeoConfig {
        api_key: "test-key".to_string(),
        model: "veo-3".to_string(),
        endpoint: format!("http://{addr}/v1beta/models"),
        consistency_mode: ConsistencyMode::Strict,
        default_duration_secs: 5,
        resolution: "1080p".to_string(),
        fps: 24,
        aspect_ratio: "16:9".to_string(),
        output_dir: base.join("output"),
        metadata_dir: base.join("metadata"),
        presenter_tracking: true,
        location_tracking: true,
        max_retries: 3,
        poll_interval: Duration::from_millis(1),
        poll_max_attempts: 60,
    }
}

fn request(scene_id: &str) -> GenerationRequest {
    let mut request = GenerationRequest::from_prompt("a bright product shot on a clean desk");
    request.scene_id = Some(scene_id.to_string());
    request
}

// ---------------------------------------------------------------------------
// Synchronous completion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn immediate_video_url_downloads_and_succeeds() {
    let service = spawn_fake_service(SubmitBehavior::Immediate, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "immediate")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(response.success, "error: {:?}", response.error);
    assert_eq!(response.retry_count, 0);
    assert_matches!(response.video_path.as_deref(), Some(_));
    assert_eq!(response.metadata.unwrap()["seed"], 7);
    assert_eq!(service.polls.load(Ordering::SeqCst), 0);

    let path = response.video_path.unwrap();
    assert!(path.contains("demo_segment_1"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, CLIP_BYTES);
}

// ---------------------------------------------------------------------------
// Asynchronous completion via polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_poll_done_succeeds_without_further_polls() {
    let service =
        spawn_fake_service(SubmitBehavior::Operation, PollBehavior::PendingFirst(0)).await;
    let client = VeoClient::new(test_config(service.addr, "first-poll")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(response.success, "error: {:?}", response.error);
    assert_eq!(service.polls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pending_polls_then_succeeds() {
    let service =
        spawn_fake_service(SubmitBehavior::Operation, PollBehavior::PendingFirst(3)).await;
    let client = VeoClient::new(test_config(service.addr, "pending")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(response.success, "error: {:?}", response.error);
    assert_eq!(service.polls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn exhausted_polls_yield_timeout_failure() {
    let service = spawn_fake_service(SubmitBehavior::Operation, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "timeout")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Generation timeout"));
    assert_eq!(service.polls.load(Ordering::SeqCst), 60);
}

#[tokio::test]
async fn remote_error_payload_fails_with_service_message() {
    let service = spawn_fake_service(SubmitBehavior::Operation, PollBehavior::DoneWithError).await;
    let client = VeoClient::new(test_config(service.addr, "remote-error")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("safety filter rejected"));
}

// ---------------------------------------------------------------------------
// Protocol and download failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unrecognized_submit_shape_is_format_failure() {
    let service = spawn_fake_service(SubmitBehavior::Unrecognized, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "unrecognized")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Unexpected response format from generation endpoint")
    );
}

#[tokio::test]
async fn download_failure_is_captured_not_raised() {
    let service =
        spawn_fake_service(SubmitBehavior::ImmediateMissingArtifact, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "missing-artifact")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert!(response.error.unwrap().starts_with("Download failed:"));
}

// ---------------------------------------------------------------------------
// Submission retries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn transient_server_errors_are_retried() {
    let service =
        spawn_fake_service(SubmitBehavior::FailFirst(2), PollBehavior::PendingFirst(0)).await;
    let mut config = test_config(service.addr, "retry-success");
    config.max_retries = 2;
    let client = VeoClient::new(config).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(response.success, "error: {:?}", response.error);
    assert_eq!(response.retry_count, 2);
    assert_eq!(service.submits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retries_exhausted_reports_failure_with_count() {
    let service =
        spawn_fake_service(SubmitBehavior::AlwaysServerError, PollBehavior::NeverDone).await;
    let mut config = test_config(service.addr, "retry-exhausted");
    config.max_retries = 1;
    let client = VeoClient::new(config).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert_eq!(response.retry_count, 1);
    assert_eq!(service.submits.load(Ordering::SeqCst), 2);
    assert!(response.error.unwrap().contains("500"));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let service =
        spawn_fake_service(SubmitBehavior::AlwaysBadRequest, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "no-retry-400")).unwrap();

    let response = client.generate(&request("demo_segment_1")).await;

    assert!(!response.success);
    assert_eq!(response.retry_count, 0);
    assert_eq!(service.submits.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Sequential submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sequence_completes_all_requests_on_success() {
    let service = spawn_fake_service(SubmitBehavior::Immediate, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "sequence-ok")).unwrap();

    let requests = vec![
        request("demo_segment_1"),
        request("demo_segment_2"),
        request("demo_segment_3"),
    ];
    let responses = client.generate_sequence(&requests).await;

    assert_eq!(responses.len(), 3);
    assert!(responses.iter().all(|r| r.success));
    assert_eq!(service.submits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn sequence_stops_at_first_failure() {
    let service =
        spawn_fake_service(SubmitBehavior::AlwaysBadRequest, PollBehavior::NeverDone).await;
    let client = VeoClient::new(test_config(service.addr, "sequence-stop")).unwrap();

    let requests = vec![
        request("demo_segment_1"),
        request("demo_segment_2"),
        request("demo_segment_3"),
    ];
    let responses = client.generate_sequence(&requests).await;

    assert_eq!(responses.len(), 1);
    assert!(!responses[0].success);
    assert_eq!(service.submits.load(Ordering::SeqCst), 1);
}
