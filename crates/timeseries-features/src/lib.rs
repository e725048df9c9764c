//! Time Series Feature Extraction
//!
//! Computes scalar summary features (mean, median, standard deviation,
//! interquartile range, min, max, length and dominant frequency) from a
//! one-dimensional, uniformly sampled series.

mod config;
mod error;
mod features;
mod fft;
mod statistics;

pub use config::{ExtractorConfig, DEFAULT_SAMPLE_RATE};
pub use error::FeatureError;
pub use features::{Feature, FeatureExtractor, FeatureValue, FeatureVector, FEATURE_DIMENSION};
pub use fft::{dominant_frequency, frequency_bins, FftAnalyzer};
pub use statistics::{iqr, length, max, mean, median, min, percentile, std_dev};
