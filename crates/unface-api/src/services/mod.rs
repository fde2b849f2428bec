//! Business logic services.

pub mod classifier;

pub use classifier::{AgeClassifier, ClassifyError};
