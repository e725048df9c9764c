//! FFT-based Frequency Analysis

use crate::config::DEFAULT_SAMPLE_RATE;
use crate::error::FeatureError;
use crate::statistics::validate;
use rustfft::{FftPlanner, num_complex::Complex};
use tracing::trace;

/// Normalized frequency of each DFT bin, in transform order.
///
/// Bin 0 is zero frequency, positive frequencies ascend up to `ceil(n/2) - 1`,
/// then the sequence wraps to `-floor(n/2)` and ascends towards `-1`. Each
/// entry is scaled by `1/n`, so every value lies in `[-0.5, 0.5)`.
pub fn frequency_bins(n: usize) -> Vec<f64> {
    let positive = (n + 1) / 2;
    let step = 1.0 / n as f64;
    (0..n)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k * step
        })
        .collect()
}

/// FFT Analyzer for frequency domain features
pub struct FftAnalyzer {
    /// FFT planner, caches plans across calls
    planner: FftPlanner<f64>,
    /// Sampling frequency (Hz)
    sample_rate: f64,
}

impl FftAnalyzer {
    /// Create a new FFT analyzer
    pub fn new(sample_rate: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate,
        }
    }

    /// Sampling frequency this analyzer converts bins with
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Forward DFT of a real signal
    fn transform(&mut self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(buffer.len());
        trace!(len = buffer.len(), "planned forward FFT");
        fft.process(&mut buffer);
        buffer
    }

    /// Frequency (Hz) of the spectral component with the largest magnitude.
    ///
    /// The whole two-sided spectrum is searched without windowing; the first
    /// bin wins on ties. The zero-frequency bin is a candidate, so a series with
    /// a large offset reports 0 Hz unless the caller removes the mean first.
    pub fn dominant_frequency(&mut self, series: &[f64]) -> Result<f64, FeatureError> {
        validate("DominantFrequency", series)?;

        let spectrum = self.transform(series);
        let mut max_magnitude = f64::NEG_INFINITY;
        let mut dominant_idx = 0;
        for (i, c) in spectrum.iter().enumerate() {
            let magnitude = c.norm();
            if magnitude > max_magnitude {
                max_magnitude = magnitude;
                dominant_idx = i;
            }
        }

        let bins = frequency_bins(spectrum.len());
        trace!(bin = dominant_idx, magnitude = max_magnitude, "dominant bin");
        Ok((bins[dominant_idx] * self.sample_rate).abs())
    }
}

impl Default for FftAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

/// Dominant frequency in Hz, assuming 32 samples per second
pub fn dominant_frequency(series: &[f64]) -> Result<f64, FeatureError> {
    FftAnalyzer::default().dominant_frequency(series)
}
