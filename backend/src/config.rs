//! Gateway configuration.
//!
//! Values come from, in order of precedence: CLI flags, environment
//! variables (a `.env` file is loaded first if present), built-in defaults.
//!
//! | Variable                     | Default      |
//! |------------------------------|--------------|
//! | `DEEPSCAN_HOST`              | `0.0.0.0`    |
//! | `DEEPSCAN_PORT`              | `8000`       |
//! | `DETECTOR_URL`               | *(required)* |
//! | `DEEPSCAN_STATIC_DIR`        | *(none)*     |
//! | `DEEPSCAN_MAX_UPLOAD_BYTES`  | 50 MiB       |

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default listening port, same as the original service.
pub const DEFAULT_PORT: u16 = 8000;

/// Default upload limit (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Room for multipart boundaries and part headers on top of the file itself.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Full URL of the upstream detector's analyze endpoint
    pub detector_url: Option<String>,
    /// Directory with the built widget (`trunk build` output)
    pub static_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            detector_url: None,
            static_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("DEEPSCAN_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("DEEPSCAN_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "DEEPSCAN_PORT",
                value: port,
            })?;
        }
        config.detector_url = lookup("DETECTOR_URL").filter(|url| !url.trim().is_empty());
        config.static_dir = lookup("DEEPSCAN_STATIC_DIR").map(PathBuf::from);
        if let Some(limit) = lookup("DEEPSCAN_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = limit.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "DEEPSCAN_MAX_UPLOAD_BYTES",
                value: limit,
            })?;
        }

        Ok(config)
    }

    /// The detector URL, or an error if none was configured.
    pub fn require_detector_url(&self) -> Result<&str, ConfigError> {
        self.detector_url
            .as_deref()
            .ok_or(ConfigError::MissingDetectorUrl)
    }

    /// Limit for the whole request body: the file limit plus multipart framing.
    pub fn body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert!(matches!(
            config.require_detector_url(),
            Err(ConfigError::MissingDetectorUrl)
        ));
    }

    #[test]
    fn test_env_values() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("DEEPSCAN_HOST", "127.0.0.1"),
            ("DEEPSCAN_PORT", "9100"),
            ("DETECTOR_URL", "http://detector:8000/analyze"),
            ("DEEPSCAN_STATIC_DIR", "frontend/dist"),
            ("DEEPSCAN_MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
        assert_eq!(config.require_detector_url().unwrap(), "http://detector:8000/analyze");
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_body_limit_leaves_room_for_framing() {
        let config = GatewayConfig {
            max_upload_bytes: 4096,
            ..GatewayConfig::default()
        };
        assert_eq!(config.body_limit(), 4096 + MULTIPART_OVERHEAD_BYTES);

        let unbounded = GatewayConfig {
            max_upload_bytes: usize::MAX,
            ..GatewayConfig::default()
        };
        assert_eq!(unbounded.body_limit(), usize::MAX);
    }

    #[test]
    fn test_invalid_port() {
        let err = GatewayConfig::from_lookup(lookup_from(&[("DEEPSCAN_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("DEEPSCAN_PORT"));
    }

    #[test]
    fn test_blank_detector_url_is_missing() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("DETECTOR_URL", "  ")])).unwrap();
        assert!(config.detector_url.is_none());
    }
}
