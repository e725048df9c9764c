//! Extractor configuration

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Samples per second assumed when no rate is configured.
///
/// Existing dominant-frequency results were produced at this rate, so it
/// stays the default even though it describes the acquisition, not the data.
pub const DEFAULT_SAMPLE_RATE: f64 = 32.0;

/// Feature extractor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sampling frequency of the series (Hz)
    pub sample_rate: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl ExtractorConfig {
    /// Config for a series sampled at `sample_rate` Hz
    pub fn with_sample_rate(sample_rate: f64) -> Self {
        Self { sample_rate }
    }

    /// Check that the sample rate is finite and positive
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.sample_rate.is_finite() && self.sample_rate > 0.0 {
            Ok(())
        } else {
            Err(FeatureError::InvalidSampleRate(self.sample_rate))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let config = ExtractorConfig::default();
        assert_eq!(config.sample_rate, 32.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rates() {
        assert!(ExtractorConfig::with_sample_rate(0.0).validate().is_err());
        assert!(ExtractorConfig::with_sample_rate(-8.0).validate().is_err());
        assert!(ExtractorConfig::with_sample_rate(f64::INFINITY).validate().is_err());
        assert!(ExtractorConfig::with_sample_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: ExtractorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExtractorConfig::default());

        let config: ExtractorConfig = serde_json::from_str(r#"{"sample_rate": 50.0}"#).unwrap();
        assert_eq!(config.sample_rate, 50.0);
    }
}
