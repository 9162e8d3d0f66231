//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Media Types** - what kind of file the user picked
//! - **API Types** - the analysis service's answer
//! - **Display Types** - how a result is rendered
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Media Types
// =============================================================================

/// Media kind of a selected file, derived from its MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a declared MIME type. Anything that is not `image/*` or
    /// `video/*` yields `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the `/analyze` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Whether the service flagged the media as manipulated
    pub is_deepfake: bool,
    /// Service confidence, 0.0 to 1.0
    pub confidence: f64,
}

impl AnalysisResult {
    /// Confidence as a whole percentage, rounded to nearest and clamped to 0..=100.
    pub fn percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

// =============================================================================
// Display Types
// =============================================================================

/// Colour treatment of the result label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Flagged media or an error
    Alert,
    /// Authentic media
    Positive,
    /// Request in flight
    Neutral,
}

impl Tone {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Alert => "result-alert",
            Tone::Positive => "result-positive",
            Tone::Neutral => "result-neutral",
        }
    }

    /// Label text colour.
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Alert => "#e53e3e",
            Tone::Positive => "#38a169",
            Tone::Neutral => "#4a5568",
        }
    }
}

/// Everything the result panel needs to draw itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub label: &'static str,
    pub tone: Tone,
    /// Bar width and score text, in percent
    pub percent: u8,
}

impl ResultView {
    pub const DEEPFAKE_LABEL: &'static str = "Deepfake Detected";
    pub const AUTHENTIC_LABEL: &'static str = "Authentic";
    pub const ERROR_LABEL: &'static str = "Error analyzing file";
    pub const PROCESSING_LABEL: &'static str = "Processing...";

    /// Placeholder shown while a request is in flight.
    pub fn processing() -> Self {
        Self {
            label: Self::PROCESSING_LABEL,
            tone: Tone::Neutral,
            percent: 0,
        }
    }

    /// Generic failure. Every transport or parse error collapses to this.
    pub fn failed() -> Self {
        Self {
            label: Self::ERROR_LABEL,
            tone: Tone::Alert,
            percent: 0,
        }
    }

    /// `width: NN%` value for the confidence bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Text next to the bar.
    pub fn score_text(&self) -> String {
        format!("{}%", self.percent)
    }
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let (label, tone) = if result.is_deepfake {
            (Self::DEEPFAKE_LABEL, Tone::Alert)
        } else {
            (Self::AUTHENTIC_LABEL, Tone::Positive)
        };
        Self {
            label,
            tone,
            percent: result.percent(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Could not build or send the request.
    Network(String),
    /// The service answered with a non-success status.
    Server { status: u16, body: String },
    /// The response body was not a valid analysis result.
    Parse(String),
    /// Reading the file for preview failed.
    Preview(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, body } => write!(f, "Server error ({}): {}", status, body),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Preview(msg) => write!(f, "Preview error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
