//! Client for the external detection service.
//!
//! The gateway never looks inside the media: it forwards the uploaded bytes
//! as multipart field `file` and normalises the service's JSON answer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deepscan::detector::{DetectorClient, Upload};
//!
//! let client = DetectorClient::new("http://detector:8000/analyze");
//! let upload = Upload::from_file(Path::new("face.jpg"), "image/jpeg").await?;
//! let verdict = client.analyze(upload).await?;
//! ```

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::{DetectorError, DetectorResult};

/// Score above which media is flagged when the service sends only a confidence.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// A file to be analyzed.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: String,
}

impl Upload {
    /// Read a file from disk without blocking the runtime.
    pub async fn from_file(path: &Path, content_type: &str) -> std::io::Result<Self> {
        Ok(Self {
            bytes: tokio::fs::read(path).await?,
            file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            content_type: content_type.to_string(),
        })
    }
}

/// Normalised detector answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_deepfake: bool,
    pub confidence: f64,
}

/// Raw detector body. Every field is optional so that error bodies parse too.
#[derive(Debug, Deserialize)]
struct DetectorBody {
    #[serde(default)]
    is_deepfake: Option<bool>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the detection service.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    url: String,
    http: reqwest::Client,
}

impl DetectorClient {
    /// Create a client posting to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one file and return the verdict. Single attempt, no retries.
    pub async fn analyze(&self, upload: Upload) -> DetectorResult<Verdict> {
        let size = upload.bytes.len();
        let mut part = Part::bytes(upload.bytes)
            .mime_str(&upload.content_type)
            .map_err(|e| DetectorError::RequestFailed(e.to_string()))?;
        if let Some(name) = upload.file_name {
            part = part.file_name(name);
        }
        let form = Form::new().part("file", part);

        tracing::debug!(url = %self.url, bytes = size, "forwarding to detector");

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DetectorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DetectorError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(DetectorError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_verdict(&body)
    }
}

/// Parse and check a detector body.
pub fn parse_verdict(body: &str) -> DetectorResult<Verdict> {
    let raw: DetectorBody =
        serde_json::from_str(body).map_err(|e| DetectorError::InvalidResponse(e.to_string()))?;

    let confidence = match (raw.confidence, raw.error) {
        (Some(confidence), _) => confidence,
        (None, Some(error)) => return Err(DetectorError::InvalidResponse(error)),
        (None, None) => {
            return Err(DetectorError::InvalidResponse("missing 'confidence'".to_string()))
        }
    };

    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(DetectorError::ConfidenceOutOfRange(confidence));
    }

    Ok(Verdict {
        is_deepfake: raw.is_deepfake.unwrap_or(confidence > DEFAULT_THRESHOLD),
        confidence,
    })
}

/// Pull `error` out of a JSON error body, or fall back to the (truncated) raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<DetectorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.chars().take(200).collect())
}
