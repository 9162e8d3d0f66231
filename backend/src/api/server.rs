//! HTTP Server for the DeepScan gateway.
//!
//! Serves the built widget and relays analysis requests to the detector.
//!
//! # API Endpoints
//!
//! | Method | Path       | Description                                   |
//! |--------|------------|-----------------------------------------------|
//! | GET    | `/health`  | Health check                                  |
//! | POST   | `/analyze` | Multipart field `file` (image/* or video/*)   |
//! | GET    | `/*`       | Static widget assets (if a directory is set)  |

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::types::{AnalysisResponse, HealthResponse};
use crate::config::GatewayConfig;
use crate::detector::{DetectorClient, Upload};
use crate::error::{ServerError, ServerResult};
use crate::media::MediaKind;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub detector: DetectorClient,
    /// Largest accepted `file` part, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(detector: DetectorClient, max_upload_bytes: usize) -> Self {
        Self {
            detector,
            max_upload_bytes,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze));

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    // the file part itself is capped in `analyze`
    app.layer(DefaultBodyLimit::max(config.body_limit()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let detector = DetectorClient::new(config.require_detector_url()?);
    let app = build_router(
        AppState::new(detector.clone(), config.max_upload_bytes),
        &config,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("🚀 DeepScan gateway running on http://{}", listener.local_addr()?);
    tracing::info!("   POST /analyze -> {}", detector.url());
    tracing::info!("   GET  /health");
    match &config.static_dir {
        Some(dir) => tracing::info!("   GET  /*       -> {}", dir.display()),
        None => tracing::info!("   (no static directory, widget not served)"),
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "deepscan".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        detector: state.detector.url().to_string(),
    })
}

/// Analyze endpoint
async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<AnalysisResponse>> {
    let mut upload: Option<Upload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let kind = MediaKind::from_mime(&content_type)
            .ok_or_else(|| ServerError::UnsupportedMediaType(content_type.clone()))?;
        let file_name = field.file_name().map(str::to_owned);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > state.max_upload_bytes {
                return Err(ServerError::PayloadTooLarge(format!(
                    "file exceeds {} bytes",
                    state.max_upload_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        tracing::info!(
            "📄 {} {} ({} bytes)",
            kind.as_str(),
            file_name.as_deref().unwrap_or("unnamed"),
            bytes.len()
        );

        upload = Some(Upload {
            bytes,
            file_name,
            content_type,
        });
        break;
    }

    let upload = upload.ok_or(ServerError::MissingFile)?;
    let verdict = state.detector.analyze(upload).await?;

    tracing::info!(
        "   {} ({:.2}%)",
        if verdict.is_deepfake { "Deepfake Detected" } else { "Authentic" },
        verdict.confidence * 100.0
    );

    Ok(Json(verdict.into()))
}

fn multipart_error(e: MultipartError) -> ServerError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(e.body_text())
    } else {
        ServerError::Multipart(e.body_text())
    }
}
