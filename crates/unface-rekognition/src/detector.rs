//! Face detection capability trait.

use async_trait::async_trait;
use unface_models::DetectedFace;

use crate::error::DetectionResult;

/// A remote capability that finds faces in a still image.
///
/// Implementations must be shareable across concurrent requests and must
/// return faces in the provider's own order.
#[async_trait]
pub trait FaceDetector: Send + Sync {
    /// Detect faces in JPEG/PNG image bytes, requesting all face attributes.
    async fn detect_faces(&self, image: Vec<u8>) -> DetectionResult<Vec<DetectedFace>>;
}
