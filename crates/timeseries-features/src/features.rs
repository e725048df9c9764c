//! Feature Vector Assembly

use crate::config::ExtractorConfig;
use crate::error::FeatureError;
use crate::fft::{self, FftAnalyzer};
use crate::statistics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 8;

/// A named summary feature of a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Mean,
    Median,
    Std,
    #[serde(rename = "IQR")]
    Iqr,
    Min,
    Max,
    Length,
    DominantFrequency,
}

impl Feature {
    /// Every feature, in feature vector order
    pub const ALL: [Feature; FEATURE_DIMENSION] = [
        Feature::Mean,
        Feature::Median,
        Feature::Std,
        Feature::Iqr,
        Feature::Min,
        Feature::Max,
        Feature::Length,
        Feature::DominantFrequency,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Feature::Mean => "Mean",
            Feature::Median => "Median",
            Feature::Std => "Std",
            Feature::Iqr => "IQR",
            Feature::Min => "Min",
            Feature::Max => "Max",
            Feature::Length => "Length",
            Feature::DominantFrequency => "DominantFrequency",
        }
    }

    /// Compute this feature at the default sample rate
    pub fn compute(self, series: &[f64]) -> Result<FeatureValue, FeatureError> {
        let value = match self {
            Feature::Mean => statistics::mean(series)?,
            Feature::Median => statistics::median(series)?,
            Feature::Std => statistics::std_dev(series)?,
            Feature::Iqr => statistics::iqr(series)?,
            Feature::Min => statistics::min(series)?,
            Feature::Max => statistics::max(series)?,
            Feature::Length => return Ok(FeatureValue::Count(statistics::length(series))),
            Feature::DominantFrequency => fft::dominant_frequency(series)?,
        };
        Ok(FeatureValue::Scalar(value))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| FeatureError::UnknownFeature(s.to_string()))
    }
}

/// Result of a single feature computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// Floating point statistic
    Scalar(f64),
    /// Sample count
    Count(usize),
}

impl FeatureValue {
    /// Value as a float, counts converted
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Scalar(v) => v,
            FeatureValue::Count(n) => n as f64,
        }
    }
}

/// All summary features of one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Interquartile range
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    /// Number of samples
    pub length: usize,
    /// Dominant frequency (Hz)
    pub dominant_frequency: f64,
}

impl FeatureVector {
    /// Feature values in `Feature::ALL` order
    pub fn to_array(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.mean,
            self.median,
            self.std_dev,
            self.iqr,
            self.min,
            self.max,
            self.length as f64,
            self.dominant_frequency,
        ]
    }

    /// Look up one feature by kind
    pub fn get(&self, feature: Feature) -> FeatureValue {
        match feature {
            Feature::Mean => FeatureValue::Scalar(self.mean),
            Feature::Median => FeatureValue::Scalar(self.median),
            Feature::Std => FeatureValue::Scalar(self.std_dev),
            Feature::Iqr => FeatureValue::Scalar(self.iqr),
            Feature::Min => FeatureValue::Scalar(self.min),
            Feature::Max => FeatureValue::Scalar(self.max),
            Feature::Length => FeatureValue::Count(self.length),
            Feature::DominantFrequency => FeatureValue::Scalar(self.dominant_frequency),
        }
    }
}

/// Feature extractor for time series at a configured sample rate
pub struct FeatureExtractor {
    /// FFT analyzer
    fft_analyzer: FftAnalyzer,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, FeatureError> {
        config.validate()?;
        Ok(Self {
            fft_analyzer: FftAnalyzer::new(config.sample_rate),
        })
    }

    /// Sample rate (Hz) used for the dominant frequency
    pub fn sample_rate(&self) -> f64 {
        self.fft_analyzer.sample_rate()
    }

    /// Compute a single feature
    pub fn compute(&mut self, feature: Feature, series: &[f64]) -> Result<FeatureValue, FeatureError> {
        match feature {
            Feature::DominantFrequency => self
                .fft_analyzer
                .dominant_frequency(series)
                .map(FeatureValue::Scalar),
            other => other.compute(series),
        }
    }

    /// Extract every feature from a series
    pub fn extract(&mut self, series: &[f64]) -> Result<FeatureVector, FeatureError> {
        debug!(
            "Extracting features: {} samples at {} Hz",
            series.len(),
            self.sample_rate()
        );

        Ok(FeatureVector {
            mean: statistics::mean(series)?,
            median: statistics::median(series)?,
            std_dev: statistics::std_dev(series)?,
            iqr: statistics::iqr(series)?,
            min: statistics::min(series)?,
            max: statistics::max(series)?,
            length: statistics::length(series),
            dominant_frequency: self.fft_analyzer.dominant_frequency(series)?,
        })
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            fft_analyzer: FftAnalyzer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_feature_extraction() {
        let mut extractor = FeatureExtractor::default();
        let features = extractor.extract(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(features.mean, 3.0);
        assert_eq!(features.median, 3.0);
        assert_eq!(features.min, 1.0);
        assert_eq!(features.max, 5.0);
        assert_eq!(features.length, 5);
        assert!((features.std_dev - 2.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(features.dominant_frequency, 0.0);
        assert_eq!(features.to_array().len(), FEATURE_DIMENSION);
    }

    #[test]
    fn test_vector_matches_individual_features() {
        let series: Vec<f64> = (0..48)
            .map(|i| (2.0 * PI * 3.0 * i as f64 / 32.0).sin() + 0.1 * i as f64)
            .collect();
        let mut extractor = FeatureExtractor::default();
        let features = extractor.extract(&series).unwrap();

        for (feature, value) in Feature::ALL.into_iter().zip(features.to_array()) {
            let single = feature.compute(&series).unwrap();
            assert_eq!(single.as_f64().to_bits(), value.to_bits(), "{feature}");
            assert_eq!(features.get(feature), single);
        }
    }

    #[test]
    fn test_empty_series() {
        let mut extractor = FeatureExtractor::default();
        assert_eq!(
            extractor.extract(&[]),
            Err(FeatureError::EmptySeries { feature: "Mean" })
        );
        assert_eq!(Feature::Length.compute(&[]).unwrap(), FeatureValue::Count(0));
        for feature in Feature::ALL.into_iter().filter(|f| *f != Feature::Length) {
            assert!(feature.compute(&[]).is_err(), "{feature}");
        }
    }

    #[test]
    fn test_configured_sample_rate() {
        let mut extractor = FeatureExtractor::new(ExtractorConfig::with_sample_rate(64.0)).unwrap();
        let series: Vec<f64> = (0..64)
            .map(|i| (2.0 * PI * 8.0 * i as f64 / 64.0).cos())
            .collect();
        let value = extractor.compute(Feature::DominantFrequency, &series).unwrap();
        assert!((value.as_f64() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = FeatureExtractor::new(ExtractorConfig::with_sample_rate(0.0));
        assert!(matches!(result, Err(FeatureError::InvalidSampleRate(_))));
    }

    #[test]
    fn test_feature_names() {
        for feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>().unwrap(), feature);
        }
        assert_eq!("IQR".parse::<Feature>().unwrap(), Feature::Iqr);
        assert_eq!(
            "Variance".parse::<Feature>(),
            Err(FeatureError::UnknownFeature("Variance".to_string()))
        );
    }

    #[test]
    fn test_vector_serialization() {
        let features = FeatureExtractor::default().extract(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        let json = serde_json::to_string(&features).unwrap();
        let parsed: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
        assert_eq!(parsed.iqr, 0.0);
        assert_eq!(parsed.std_dev, 0.0);
    }
}
