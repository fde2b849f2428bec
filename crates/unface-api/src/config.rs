//! API configuration.

use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;

/// Invalid value in the server configuration.
#[derive(Debug, Error)]
#[error("Invalid value for {key}: {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Upper bound on a single face detection call
    pub detection_timeout: Duration,
    /// Per-IP rate limit for `/api` routes; disabled when `None`
    pub rate_limit_rps: Option<NonZeroU32>,
    /// Expose Prometheus metrics at `/metrics`
    pub metrics_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origins: vec!["*".to_string()],
            max_body_size: 10 * 1024 * 1024, // 10MB
            detection_timeout: Duration::from_secs(10),
            rate_limit_rps: None,
            metrics_enabled: true,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    ///
    /// Unset variables take their defaults; set but unparsable values are
    /// rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rate_limit_rps = parse(&lookup, "RATE_LIMIT_RPS")?.and_then(NonZeroU32::new);

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "PORT")?.unwrap_or(defaults.port),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            max_body_size: parse(&lookup, "MAX_BODY_SIZE")?.unwrap_or(defaults.max_body_size),
            detection_timeout: parse(&lookup, "DETECTION_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.detection_timeout),
            rate_limit_rps,
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { key, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.max_body_size, 10 * 1024 * 1024);
        assert_eq!(config.detection_timeout, Duration::from_secs(10));
        assert!(config.rate_limit_rps.is_none());
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_config_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("DETECTION_TIMEOUT_SECS", "3"),
            ("RATE_LIMIT_RPS", "5"),
            ("METRICS_ENABLED", "false"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.detection_timeout, Duration::from_secs(3));
        assert_eq!(config.rate_limit_rps, NonZeroU32::new(5));
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_zero_rate_limit_disables() {
        let config = ApiConfig::from_lookup(lookup(&[("RATE_LIMIT_RPS", "0")])).unwrap();
        assert!(config.rate_limit_rps.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.key, "PORT");
    }
}
