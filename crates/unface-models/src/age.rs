//! Age range models and the adult/minor decision policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Estimated ages at or above this value are classified as adult.
///
/// The comparison is made against the midpoint of the provider's range, not
/// its low bound, so ranges straddling the threshold are judged by their
/// center.
pub const ADULT_AGE_THRESHOLD: u32 = 16;

/// Inclusive age bounds estimated by the detection provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AgeRange {
    /// Lower bound (years)
    pub low: u32,
    /// Upper bound (years)
    pub high: u32,
}

impl AgeRange {
    /// Create a new age range.
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

/// Estimated age: `round((low + high) / 2)` with halves rounded up.
pub fn estimate_age(range: &AgeRange) -> u32 {
    let sum = u64::from(range.low) + u64::from(range.high);
    // (sum + 1) / 2 never exceeds u32::MAX for u32 inputs
    ((sum + 1) / 2) as u32
}

/// Adult classification for an estimated age.
pub fn is_adult(estimated_age: u32) -> bool {
    estimated_age >= ADULT_AGE_THRESHOLD
}

/// Binary classification label, used in logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeLabel {
    Adult,
    Minor,
}

impl AgeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeLabel::Adult => "ADULT",
            AgeLabel::Minor => "MINOR",
        }
    }
}

impl fmt::Display for AgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age decision derived from a single detected face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeDecision {
    /// Provider age range
    pub age_range: AgeRange,
    /// Midpoint of the age range
    pub estimated_age: u32,
    /// Whether the estimated age meets the adult threshold
    pub is_adult: bool,
    /// Provider face confidence (0-100), 0 when not reported
    pub confidence: f32,
}

impl AgeDecision {
    /// Apply the classification policy to a provider age range.
    pub fn from_range(age_range: AgeRange, confidence: Option<f32>) -> Self {
        let estimated_age = estimate_age(&age_range);
        Self {
            age_range,
            estimated_age,
            is_adult: is_adult(estimated_age),
            confidence: confidence.unwrap_or(0.0),
        }
    }

    pub fn label(&self) -> AgeLabel {
        if self.is_adult {
            AgeLabel::Adult
        } else {
            AgeLabel::Minor
        }
    }
}
