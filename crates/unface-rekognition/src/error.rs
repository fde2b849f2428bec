//! Detection error types.

use std::time::Duration;

use thiserror::Error;

/// Result type for detection operations.
pub type DetectionResult<T> = Result<T, DetectionError>;

/// Errors that can occur while calling the detection provider.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Failed to configure detection client: {0}")]
    ConfigError(String),

    #[error("Detection provider error: {0}")]
    Provider(String),

    #[error("Detection timed out after {0:?}")]
    Timeout(Duration),
}

impl DetectionError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Short, stable reason used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            DetectionError::ConfigError(_) => "config",
            DetectionError::Provider(_) => "provider",
            DetectionError::Timeout(_) => "timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = DetectionError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Detection timed out after 1.5s");
        assert_eq!(err.reason(), "timeout");
    }

    #[test]
    fn test_provider_message() {
        let err = DetectionError::provider("InvalidImageFormatException");
        assert_eq!(err.to_string(), "Detection provider error: InvalidImageFormatException");
    }
}
