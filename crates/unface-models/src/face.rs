//! Detected face model.

use serde::{Deserialize, Serialize};

use crate::age::{AgeDecision, AgeRange};

/// A face as reported by the detection provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    /// Estimated age range, if the provider returned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,

    /// Detection confidence (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl DetectedFace {
    pub fn new(age_range: Option<AgeRange>, confidence: Option<f32>) -> Self {
        Self {
            age_range,
            confidence,
        }
    }

    /// Classify this face, or `None` when no age range was reported.
    pub fn decide(&self) -> Option<AgeDecision> {
        self.age_range
            .map(|range| AgeDecision::from_range(range, self.confidence))
    }
}
