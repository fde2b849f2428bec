//! Rekognition client configuration.

use std::fmt;

use crate::error::{DetectionError, DetectionResult};

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the Rekognition client.
#[derive(Clone)]
pub struct RekognitionConfig {
    /// AWS region identifier
    pub region: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Session token for temporary credentials
    pub session_token: Option<String>,
}

impl RekognitionConfig {
    /// Create config from environment variables.
    ///
    /// Fails when either credential is missing or empty.
    pub fn from_env() -> DetectionResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> DetectionResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: non_empty("AWS_ACCESS_KEY_ID")
                .ok_or_else(|| DetectionError::config_error("AWS_ACCESS_KEY_ID not set"))?,
            secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY")
                .ok_or_else(|| DetectionError::config_error("AWS_SECRET_ACCESS_KEY not set"))?,
            session_token: non_empty("AWS_SESSION_TOKEN"),
        })
    }
}

// Credentials stay out of logs.
impl fmt::Debug for RekognitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RekognitionConfig")
            .field("region", &self.region)
            .field("access_key_id", &"***")
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}
