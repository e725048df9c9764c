//! Feature Extraction Error Types

use thiserror::Error;

/// Errors raised for invalid time series input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Series has no samples
    #[error("{feature} is undefined for an empty series")]
    EmptySeries { feature: &'static str },

    /// Series contains a NaN sample
    #[error("{feature}: sample at index {index} is not a number")]
    NotANumber { feature: &'static str, index: usize },

    /// Percentile rank outside [0, 100]
    #[error("Percentile {0} is out of range [0, 100]")]
    InvalidPercentile(f64),

    /// Sample rate must be finite and positive
    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(f64),

    /// No feature with this name
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),
}
