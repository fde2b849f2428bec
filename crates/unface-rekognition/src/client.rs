//! Rekognition detector implementation.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_rekognition::config::{Builder, Region};
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Attribute, FaceDetail, Image};
use aws_sdk_rekognition::Client;
use tracing::{debug, info};
use unface_models::{AgeRange, DetectedFace};

use crate::config::RekognitionConfig;
use crate::detector::FaceDetector;
use crate::error::{DetectionError, DetectionResult};

/// AWS Rekognition `DetectFaces` client.
///
/// Cheap to clone; the underlying SDK client is shared.
#[derive(Clone)]
pub struct RekognitionDetector {
    client: Client,
}

impl RekognitionDetector {
    /// Create a new detector from configuration.
    pub fn new(config: RekognitionConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            config.session_token.clone(),
            None,
            "unface-env",
        );

        let sdk_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .build();

        info!(region = %config.region, "Rekognition client configured");

        Self {
            client: Client::from_conf(sdk_config),
        }
    }
}

#[async_trait]
impl FaceDetector for RekognitionDetector {
    async fn detect_faces(&self, image: Vec<u8>) -> DetectionResult<Vec<DetectedFace>> {
        debug!(bytes = image.len(), "Sending DetectFaces request");

        let output = self
            .client
            .detect_faces()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .attributes(Attribute::All)
            .send()
            .await
            .map_err(|e| DetectionError::provider(DisplayErrorContext(&e).to_string()))?;

        let faces: Vec<DetectedFace> = output.face_details().iter().map(face_from_detail).collect();
        debug!(faces = faces.len(), "DetectFaces returned");

        Ok(faces)
    }
}

/// Map a Rekognition face to the provider-neutral model.
///
/// A reported age range with a missing bound gets `0` for that bound;
/// negative bounds are clamped to `0`.
pub fn face_from_detail(detail: &FaceDetail) -> DetectedFace {
    let age_range = detail.age_range().map(|range| {
        AgeRange::new(
            non_negative(range.low()),
            non_negative(range.high()),
        )
    });

    DetectedFace::new(age_range, detail.confidence())
}

fn non_negative(value: Option<i32>) -> u32 {
    value.map(|v| v.max(0) as u32).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use aws_sdk_rekognition::types::AgeRange as SdkAgeRange;

    use super::*;

    #[test]
    fn test_maps_full_detail() {
        let detail = FaceDetail::builder()
            .age_range(SdkAgeRange::builder().low(20).high(30).build())
            .confidence(98.5)
            .build();

        let face = face_from_detail(&detail);
        assert_eq!(face.age_range, Some(AgeRange::new(20, 30)));
        assert_eq!(face.confidence, Some(98.5));
    }

    #[test]
    fn test_missing_bounds_default_to_zero() {
        let detail = FaceDetail::builder()
            .age_range(SdkAgeRange::builder().high(12).build())
            .build();

        let face = face_from_detail(&detail);
        assert_eq!(face.age_range, Some(AgeRange::new(0, 12)));
        assert_eq!(face.confidence, None);
    }

    #[test]
    fn test_missing_age_range_stays_absent() {
        let detail = FaceDetail::builder().confidence(99.0).build();
        assert_eq!(face_from_detail(&detail).age_range, None);
    }

    #[test]
    fn test_negative_bounds_clamped() {
        let detail = FaceDetail::builder()
            .age_range(SdkAgeRange::builder().low(-3).high(4).build())
            .build();
        assert_eq!(face_from_detail(&detail).age_range, Some(AgeRange::new(0, 4)));
    }
}
