//! Application configuration.
//!
//! Centralized configuration for the DeepScan upload widget.
//! The widget is served by the gateway, so requests stay same-origin.

/// Backend API base URL.
///
/// Empty means "same origin as the page".
pub const BACKEND_URL: &str = "";

/// Path of the analysis endpoint.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit, matching the gateway's default per-file limit.
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Notice shown when a dropped or chosen file is neither image nor video.
pub const INVALID_TYPE_NOTICE: &str = "Please upload an image or video file";

/// Notice shown when a file exceeds [`MAX_FILE_SIZE`].
pub const TOO_LARGE_NOTICE: &str = "File is too large (max 50 MB)";

/// Notice shown when the chosen file cannot be read for preview.
pub const PREVIEW_FAILED_NOTICE: &str = "Could not read the selected file";

/// Drop zone border while a drag hovers it.
pub const DROP_ACTIVE_BORDER: &str = "#4299e1";

/// Drop zone border at rest.
pub const DROP_IDLE_BORDER: &str = "#cbd5e0";

/// Full URL of the analysis endpoint.
pub fn analyze_url() -> String {
    format!("{}{}", BACKEND_URL, ANALYZE_ENDPOINT)
}
