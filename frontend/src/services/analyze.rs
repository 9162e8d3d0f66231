//! HTTP service posting a media file to the analysis endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::{AnalysisResult, AppError, AppResult};

/// Upload `file` as multipart field `file` and parse the verdict.
///
/// Network, status and parse failures all come back as [`AppError`]; the
/// caller renders them the same way.
pub async fn analyze_media(file: &File, url: &str) -> AppResult<AnalysisResult> {
    let form_data =
        FormData::new().map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    log::debug!("Posting {} ({} bytes) to {}", file.name(), file.size(), url);

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    parse_analysis(&body)
}

/// Parse and check a `{ is_deepfake, confidence }` body.
pub fn parse_analysis(body: &str) -> AppResult<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))?;

    if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
        return Err(AppError::Parse(format!(
            "confidence {} outside [0, 1]",
            result.confidence
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"is_deepfake": true, "confidence": 0.87}"#;
        let result = parse_analysis(json).unwrap();
        assert!(result.is_deepfake);
        assert_eq!(result.confidence, 0.87);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{"is_deepfake": false, "confidence": 0.12, "frames_analyzed": 30}"#;
        let result = parse_analysis(json).unwrap();
        assert!(!result.is_deepfake);
    }

    #[test]
    fn test_service_error_body_rejected() {
        let json = r#"{"error": "cannot identify image file"}"#;
        assert!(matches!(parse_analysis(json), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(
            parse_analysis("<html>502 Bad Gateway</html>"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let json = r#"{"is_deepfake": true, "confidence": 1.5}"#;
        let err = parse_analysis(json).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }
}
