//! # DeepScan - analysis gateway
//!
//! Serves the DeepScan upload widget and relays `POST /analyze` to an
//! external deepfake detection service. The gateway performs no media
//! decoding and no model execution.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  multipart  ┌─────────────┐  multipart  ┌─────────────┐
//! │   Widget    │────────────▶│   Gateway   │────────────▶│  Detector   │
//! │ (WASM/DOM)  │◀────────────│ (/analyze)  │◀────────────│ (external)  │
//! └─────────────┘    JSON     └─────────────┘    JSON     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Gateway configuration (flags, env, `.env`)
//! - [`media`] - Image/video classification of MIME types and paths
//! - [`detector`] - Client for the detection service
//! - [`api`] - HTTP API server

pub mod error;
pub mod config;
pub mod media;
pub mod detector;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DetectorError, ServerError};
pub use config::GatewayConfig;
pub use media::MediaKind;
pub use detector::{parse_verdict, DetectorClient, Upload, Verdict, DEFAULT_THRESHOLD};
pub use api::types::{AnalysisResponse, HealthResponse};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
