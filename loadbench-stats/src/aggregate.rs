//! Aggregate Statistics
//!
//! Computed once per backend after all scenarios have run; never updated
//! incrementally.

/// Summary statistics over one completed sample series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Population variance (sum of squared deviations divided by the count).
    pub variance: f64,
    /// Non-negative square root of the variance.
    pub std_dev: f64,
    /// Number of samples aggregated.
    pub sample_count: usize,
}

impl AggregateStats {
    /// Aggregate a completed series. Returns `None` for an empty slice;
    /// statistics over zero samples are meaningless and must not reach the
    /// report.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mean = mean(samples);
        let variance = variance(mean, samples);
        Some(Self {
            mean,
            variance,
            std_dev: std_dev(variance),
            sample_count: samples.len(),
        })
    }
}

/// Arithmetic mean. The caller must guarantee at least one sample; an empty
/// slice yields NaN.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population variance: average squared deviation from the given mean,
/// divided by the full count (not count − 1).
pub fn variance(mean: f64, samples: &[f64]) -> f64 {
    samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64
}

/// Standard deviation as the non-negative square root of the variance.
pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}
