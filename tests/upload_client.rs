// SPDX-License-Identifier: MPL-2.0
//! Upload and asset requests against a mock hosting service.

use cloudlift::domain::upload::{
    BatchOutcome, FailureKind, FileKind, FileRegistry, UploadFailure, UploadTracker,
};
use cloudlift::error::UploadError;
use cloudlift::upload::{assets, UploadCandidate, UploadClient, UploadSettings};
use futures_util::future::join_all;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPLOAD_PATH: &str = "/v1_1/demo/auto/upload";

fn settings(server: &MockServer) -> UploadSettings {
    UploadSettings {
        cloud_name: Some("demo".to_string()),
        upload_preset: Some("unsigned_preset".to_string()),
        api_base_url: server.uri(),
        ..UploadSettings::default()
    }
}

fn fixture(dir: &Path, name: &str, content: &[u8]) -> UploadCandidate {
    let file = dir.join(name);
    fs::write(&file, content).expect("write fixture");
    UploadCandidate::new(file, content.len() as u64)
}

fn accepted(server: &MockServer, stem: &str, format: &str, bytes: u64) -> serde_json::Value {
    json!({
        "public_id": format!("file-uploads/{stem}_a1b2"),
        "original_filename": stem,
        "secure_url": format!("{}/assets/{stem}.{format}", server.uri()),
        "resource_type": "image",
        "format": format,
        "bytes": bytes,
        "width": 640,
        "height": 480,
        "created_at": "2026-10-18T09:30:00Z"
    })
}

#[tokio::test]
async fn successful_upload_yields_record_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains("unsigned_preset"))
        .and(body_string_contains("file-uploads"))
        .and(body_string_contains("filename=\"cat.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted(&server, "cat", "png", 7)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidate = fixture(dir.path(), "cat.png", b"pngdata");
    let client = UploadClient::new(&settings(&server)).expect("client");

    let record = client.upload(candidate).await.expect("upload succeeds");

    assert_eq!(record.id.as_str(), "file-uploads/cat_a1b2");
    assert_eq!(record.original_name, "cat.png");
    assert_eq!(record.kind, FileKind::Image);
    assert_eq!(record.size_bytes, 7);
    assert_eq!(record.dimensions(), Some((640, 480)));
    assert!(record.url.ends_with("/assets/cat.png"));
}

#[tokio::test]
async fn custom_folder_is_sent_with_the_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains("client-invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted(&server, "scan", "pdf", 3)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidate = fixture(dir.path(), "scan.pdf", b"pdf");
    let client = UploadClient::new(&UploadSettings {
        folder: "client-invoices".to_string(),
        ..settings(&server)
    })
    .expect("client");

    let record = client.upload(candidate).await.expect("upload succeeds");

    assert_eq!(record.kind, FileKind::Document);
    assert_eq!(record.original_name, "scan.pdf");
}

#[tokio::test]
async fn service_error_message_is_reported_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": {"message": "Upload preset not found"}})),
        )
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidate = fixture(dir.path(), "cat.png", b"pngdata");
    let client = UploadClient::new(&settings(&server)).expect("client");

    match client.upload(candidate).await {
        Err(UploadError::Transfer { file_name, message }) => {
            assert_eq!(file_name, "cat.png");
            assert_eq!(message, "Upload preset not found");
        }
        other => panic!("expected Transfer error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_json_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidate = fixture(dir.path(), "cat.png", b"pngdata");
    let client = UploadClient::new(&settings(&server)).expect("client");

    let err = client.upload(candidate).await.expect_err("upload fails");
    assert_eq!(err.i18n_key(), "error-upload-transfer");
    assert!(err.to_string().contains("502"), "got: {err}");
}

#[tokio::test]
async fn missing_local_file_is_unknown_and_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidate = UploadCandidate::new(dir.path().join("vanished.png"), 10);
    let client = UploadClient::new(&settings(&server)).expect("client");

    let err = client.upload(candidate).await.expect_err("upload fails");
    assert!(matches!(err, UploadError::Unknown(_)));
}

#[tokio::test]
async fn missing_configuration_builds_no_client() {
    let server = MockServer::start().await;
    let err = UploadClient::new(&UploadSettings {
        upload_preset: None,
        ..settings(&server)
    })
    .expect_err("configuration is incomplete");

    match err {
        UploadError::Configuration { missing } => assert_eq!(missing, ["upload_preset"]),
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[tokio::test]
async fn partial_batch_keeps_successes_and_names_the_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains("filename=\"broken.png\""))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": {"message": "Invalid image file"}})),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    for stem in ["one", "two"] {
        Mock::given(method("POST"))
            .and(path(UPLOAD_PATH))
            .and(body_string_contains(format!("filename=\"{stem}.png\"")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(accepted(&server, stem, "png", 3)),
            )
            .mount(&server)
            .await;
    }

    let dir = tempdir().expect("temp dir");
    let candidates = vec![
        fixture(dir.path(), "one.png", b"one"),
        fixture(dir.path(), "broken.png", b"bad"),
        fixture(dir.path(), "two.png", b"two"),
    ];
    let client = UploadClient::new(&UploadSettings {
        max_concurrent_uploads: 2,
        ..settings(&server)
    })
    .expect("client");

    let mut tracker = UploadTracker::new();
    let mut registry = FileRegistry::new();
    let batch = tracker.begin(candidates.len()).expect("batch starts");

    let results = join_all(candidates.into_iter().map(|c| client.upload(c))).await;
    let mut outcome = None;
    for result in results {
        let folded = match result {
            Ok(record) => {
                registry.append([record]);
                Ok(())
            }
            Err(err) => Err(UploadFailure {
                file_name: err.file_name().unwrap_or_default().to_string(),
                message: err.to_string(),
                kind: FailureKind::Transfer,
            }),
        };
        outcome = tracker.record(batch, folded).or(outcome);
    }

    match outcome.expect("batch finished") {
        BatchOutcome::PartialFailure { uploaded, failures } => {
            assert_eq!(uploaded, 2);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].file_name, "broken.png");
            assert!(failures[0].message.contains("Invalid image file"));
        }
        other => panic!("expected PartialFailure, got {other:?}"),
    }
    assert_eq!(registry.len(), 2);
    assert!(!tracker.is_uploading());
    assert_eq!(tracker.percent(), 0);
}

const SLOW_REPLY: Duration = Duration::from_millis(200);

async fn timed_batch(limit: usize) -> Duration {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(accepted(&server, "slow", "png", 4))
                .set_delay(SLOW_REPLY),
        )
        .expect(3)
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let candidates: Vec<_> = ["a.png", "b.png", "c.png"]
        .iter()
        .map(|name| fixture(dir.path(), name, b"data"))
        .collect();
    let client = UploadClient::new(&UploadSettings {
        max_concurrent_uploads: limit,
        ..settings(&server)
    })
    .expect("client");

    let started = Instant::now();
    let results = join_all(candidates.into_iter().map(|c| client.upload(c))).await;
    let elapsed = started.elapsed();

    assert!(results.iter().all(Result::is_ok));
    elapsed
}

#[tokio::test]
async fn single_permit_sends_one_request_at_a_time() {
    let elapsed = timed_batch(1).await;
    assert!(elapsed >= SLOW_REPLY * 3, "three uploads overlapped: {elapsed:?}");
}

#[tokio::test]
async fn enough_permits_let_requests_overlap() {
    let elapsed = timed_batch(3).await;
    assert!(elapsed < SLOW_REPLY * 3, "uploads ran one by one: {elapsed:?}");
}

#[tokio::test]
async fn fetch_bytes_returns_body_and_rejects_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/cat.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pixels".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/report.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let bytes = assets::fetch_bytes(http.clone(), format!("{}/assets/cat.png", server.uri()))
        .await
        .expect("fetch succeeds");
    assert_eq!(bytes, b"pixels");

    let preview = assets::pdf_preview_url(&format!("{}/assets/report.pdf", server.uri()))
        .expect("pdf url converts");
    let err = assets::fetch_bytes(http, preview)
        .await
        .expect_err("missing conversion fails");
    assert!(matches!(err, assets::AssetError::Status(_)));
}

#[tokio::test]
async fn download_writes_asset_to_destination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/notes.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 body".to_vec()))
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let destination = dir.path().join("notes.pdf");

    let (written_to, bytes) = assets::download_to(
        reqwest::Client::new(),
        format!("{}/assets/notes.pdf", server.uri()),
        destination.clone(),
    )
    .await
    .expect("download succeeds");

    assert_eq!(written_to, destination);
    assert_eq!(bytes, 13);
    assert_eq!(fs::read(&destination).expect("read back"), b"%PDF-1.7 body");
}

#[tokio::test]
async fn failed_download_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempdir().expect("temp dir");
    let destination = dir.path().join("notes.pdf");

    let result = assets::download_to(
        reqwest::Client::new(),
        format!("{}/assets/notes.pdf", server.uri()),
        destination.clone(),
    )
    .await;

    assert!(result.is_err());
    assert!(!destination.exists());
}
