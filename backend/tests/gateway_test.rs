//! End-to-end tests: fake detector <- gateway <- reqwest client.

use axum::{extract::Multipart, http::StatusCode, response::Json, routing::post, Router};
use deepscan::server::{build_router, AppState};
use deepscan::{DetectorClient, GatewayConfig};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Accepts a non-empty image/video `file` part, like a real detector would.
async fn fake_flagged(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap_or_default();
        if !bytes.is_empty()
            && (content_type.starts_with("image/") || content_type.starts_with("video/"))
        {
            return (
                StatusCode::OK,
                Json(json!({ "is_deepfake": true, "confidence": 0.87 })),
            );
        }
    }
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "no file" })))
}

async fn fake_confidence_only() -> Json<Value> {
    Json(json!({ "confidence": 0.3 }))
}

async fn fake_broken() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "model not loaded" })),
    )
}

async fn spawn_detector() -> String {
    let app = Router::new()
        .route("/flagged", post(fake_flagged))
        .route("/confidence-only", post(fake_confidence_only))
        .route("/broken", post(fake_broken));
    spawn(app).await
}

async fn spawn_gateway(detector_url: String, static_dir: Option<PathBuf>, limit: usize) -> String {
    let config = GatewayConfig {
        detector_url: Some(detector_url.clone()),
        static_dir,
        max_upload_bytes: limit,
        ..GatewayConfig::default()
    };
    let app = build_router(AppState::new(DetectorClient::new(detector_url), limit), &config);
    spawn(app).await
}

fn media_form(bytes: Vec<u8>, name: &str, mime: &str) -> Form {
    let part = Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap();
    Form::new().part("file", part)
}

async fn post_form(gateway: &str, form: Form) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/analyze", gateway))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_verdict_is_relayed() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 1024 * 1024).await;

    let (status, body) = post_form(&gateway, media_form(vec![0xFF, 0xD8, 0xFF], "face.jpg", "image/jpeg")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "is_deepfake": true, "confidence": 0.87 }));
}

#[tokio::test]
async fn test_video_is_accepted() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 1024 * 1024).await;

    let (status, body) = post_form(&gateway, media_form(vec![0u8; 64], "clip.mp4", "video/mp4")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_deepfake"], true);
}

#[tokio::test]
async fn test_flag_derived_from_confidence() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/confidence-only", detector), None, 1024 * 1024).await;

    let (status, body) = post_form(&gateway, media_form(vec![1, 2, 3], "a.png", "image/png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "is_deepfake": false, "confidence": 0.3 }));
}

#[tokio::test]
async fn test_detector_failure_is_bad_gateway() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/broken", detector), None, 1024 * 1024).await;

    let (status, body) = post_form(&gateway, media_form(vec![1, 2, 3], "a.png", "image/png")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("model not loaded"));
}

#[tokio::test]
async fn test_unreachable_detector_is_bad_gateway() {
    // grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}/analyze", listener.local_addr().unwrap());
    drop(listener);

    let gateway = spawn_gateway(dead, None, 1024 * 1024).await;
    let (status, body) = post_form(&gateway, media_form(vec![1, 2, 3], "a.png", "image/png")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_media_rejected() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 1024 * 1024).await;

    let (status, body) = post_form(&gateway, media_form(b"a,b\n1,2".to_vec(), "data.csv", "text/csv")).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].as_str().unwrap().contains("text/csv"));
}

#[tokio::test]
async fn test_missing_file_field() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 1024 * 1024).await;

    let form = Form::new().text("comment", "no file here");
    let (status, body) = post_form(&gateway, form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_upload_limit() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 1024).await;

    let (status, _) = post_form(&gateway, media_form(vec![7u8; 8 * 1024], "big.png", "image/png")).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_upload_limit_boundary() {
    let detector = spawn_detector().await;
    let gateway = spawn_gateway(format!("{}/flagged", detector), None, 4096).await;

    // a file of exactly the limit fits, framing included
    let (status, body) = post_form(&gateway, media_form(vec![7u8; 4096], "edge.png", "image/png")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_deepfake"], true);

    let (status, body) = post_form(&gateway, media_form(vec![7u8; 4097], "over.png", "image/png")).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("4096"));
}

#[tokio::test]
async fn test_health() {
    let detector = spawn_detector().await;
    let detector_url = format!("{}/flagged", detector);
    let gateway = spawn_gateway(detector_url.clone(), None, 1024).await;

    let body: Value = reqwest::get(format!("{}/health", gateway))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["detector"], detector_url);
}

#[tokio::test]
async fn test_widget_is_served() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<html>deepscan widget</html>").unwrap();

    let detector = spawn_detector().await;
    let gateway = spawn_gateway(
        format!("{}/flagged", detector),
        Some(dist.path().to_path_buf()),
        1024,
    )
    .await;

    let response = reqwest::get(format!("{}/", gateway)).await.unwrap();
    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("deepscan widget"));
}
