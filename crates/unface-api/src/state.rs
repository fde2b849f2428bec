//! Application state.

use std::sync::Arc;

use unface_rekognition::{FaceDetector, RekognitionConfig, RekognitionDetector};

use crate::config::ApiConfig;
use crate::services::AgeClassifier;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub classifier: AgeClassifier,
}

impl AppState {
    /// Create application state around an existing detector.
    pub fn new(config: ApiConfig, detector: Arc<dyn FaceDetector>) -> Self {
        let classifier = AgeClassifier::new(detector, config.detection_timeout);
        Self { config, classifier }
    }

    /// Create application state backed by AWS Rekognition.
    pub fn with_rekognition(config: ApiConfig, provider: RekognitionConfig) -> Self {
        let detector = RekognitionDetector::new(provider);
        Self::new(config, Arc::new(detector))
    }
}
