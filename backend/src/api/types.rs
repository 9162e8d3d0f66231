//! REST API types for the widget.
//!
//! Field names are snake_case on the wire (`is_deepfake`, `confidence`).

use serde::{Deserialize, Serialize};

use crate::detector::Verdict;

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Whether the media was flagged as manipulated
    pub is_deepfake: bool,
    /// Detector confidence, 0.0 to 1.0
    pub confidence: f64,
}

impl From<Verdict> for AnalysisResponse {
    fn from(verdict: Verdict) -> Self {
        AnalysisResponse {
            is_deepfake: verdict.is_deepfake,
            confidence: verdict.confidence,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub detector: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let response = AnalysisResponse::from(Verdict {
            is_deepfake: true,
            confidence: 0.87,
        });
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value, json!({ "is_deepfake": true, "confidence": 0.87 }));
    }
}
