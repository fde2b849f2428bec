//! Age classification service.
//!
//! Sends an image to the face detection provider and turns the first
//! reported face into an adult/minor decision. Every call is independent;
//! the only shared piece is the detector handle.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info, warn};
use unface_models::{AgeDecision, ImagePayload};
use unface_rekognition::{DetectionError, FaceDetector};

use crate::metrics;

/// Reasons a classification produced no decision.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("No face detected in image")]
    NoFaceDetected,

    #[error("Age range not available")]
    AgeRangeUnavailable,

    #[error(transparent)]
    Detection(#[from] DetectionError),
}

impl ClassifyError {
    fn reason(&self) -> &'static str {
        match self {
            ClassifyError::NoFaceDetected => "no_face",
            ClassifyError::AgeRangeUnavailable => "no_age_range",
            ClassifyError::Detection(e) => e.reason(),
        }
    }
}

/// Classifies images as adult or minor using a face detection provider.
#[derive(Clone)]
pub struct AgeClassifier {
    detector: Arc<dyn FaceDetector>,
    timeout: Duration,
}

impl AgeClassifier {
    pub fn new(detector: Arc<dyn FaceDetector>, timeout: Duration) -> Self {
        Self { detector, timeout }
    }

    /// Classify the first face found in `image`.
    ///
    /// Faces after the first, in provider order, are ignored.
    pub async fn classify(&self, image: ImagePayload) -> Result<AgeDecision, ClassifyError> {
        let result = self.classify_inner(image).await;
        if let Err(e) = &result {
            metrics::record_detection_failure(e.reason());
        }
        result
    }

    async fn classify_inner(&self, image: ImagePayload) -> Result<AgeDecision, ClassifyError> {
        let image = image.into_bytes();
        let bytes = image.len();
        let start = Instant::now();

        let outcome =
            tokio::time::timeout(self.timeout, self.detector.detect_faces(image)).await;
        metrics::record_detection_duration(start.elapsed().as_secs_f64());

        let faces = match outcome {
            Ok(Ok(faces)) => faces,
            Ok(Err(e)) => {
                error!(error = %e, bytes, "Face detection failed");
                return Err(e.into());
            }
            Err(_) => {
                let e = DetectionError::Timeout(self.timeout);
                error!(error = %e, bytes, "Face detection failed");
                return Err(e.into());
            }
        };

        if faces.len() > 1 {
            debug!(faces = faces.len(), "Multiple faces detected, using the first");
        }

        let face = faces.into_iter().next().ok_or(ClassifyError::NoFaceDetected)?;

        let Some(decision) = face.decide() else {
            warn!(confidence = ?face.confidence, "Detected face has no age range");
            return Err(ClassifyError::AgeRangeUnavailable);
        };

        info!(
            age_low = decision.age_range.low,
            age_high = decision.age_range.high,
            estimated_age = decision.estimated_age,
            is_adult = decision.is_adult,
            label = %decision.label(),
            confidence = decision.confidence,
            "Age detection: estimated age {} -> {}",
            decision.estimated_age,
            decision.label()
        );
        metrics::record_age_decision(decision.label());

        Ok(decision)
    }
}
