//! Shared data models for the Unface age detection service.
//!
//! This crate provides:
//! - Age ranges and the adult/minor decision policy
//! - Detected face attributes as reported by a detection provider
//! - Base64 image payload decoding

pub mod age;
pub mod face;
pub mod image;

// Re-export common types
pub use age::{estimate_age, is_adult, AgeDecision, AgeLabel, AgeRange, ADULT_AGE_THRESHOLD};
pub use face::DetectedFace;
pub use image::{ImagePayload, PayloadError, PayloadResult};
