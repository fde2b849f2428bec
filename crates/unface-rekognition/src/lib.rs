//! Face detection capability.
//!
//! This crate provides:
//! - The [`FaceDetector`] trait the API server classifies against
//! - An AWS Rekognition `DetectFaces` implementation
//! - Provider configuration loaded from the environment

pub mod client;
pub mod config;
pub mod detector;
pub mod error;

pub use client::RekognitionDetector;
pub use config::RekognitionConfig;
pub use detector::FaceDetector;
pub use error::{DetectionError, DetectionResult};
