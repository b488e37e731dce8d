//! Sample Series
//!
//! Per-backend elapsed-time collection. The series carries an explicit
//! capacity equal to the scenario count for the run; recording past capacity
//! fails loudly instead of overwriting earlier samples.

use thiserror::Error;

/// Append-only series of elapsed-time measurements in seconds.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: Vec<f64>,
    capacity: usize,
}

/// Error recording into a [`SampleSeries`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// The series already holds `capacity` samples.
    #[error("sample series full ({capacity} samples); refusing to record another")]
    CapacityExceeded {
        /// Declared capacity of the series (the run's scenario count).
        capacity: usize,
    },
}

impl SampleSeries {
    /// New empty series accepting at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one measurement. Fails when the series is already full.
    pub fn record(&mut self, seconds: f64) -> Result<(), SeriesError> {
        if self.samples.len() >= self.capacity {
            return Err(SeriesError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.samples.push(seconds);
        Ok(())
    }

    /// Recorded samples, in recording order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Declared capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_up_to_capacity() {
        let mut series = SampleSeries::with_capacity(3);
        series.record(1.5).unwrap();
        series.record(2.5).unwrap();
        series.record(0.5).unwrap();

        assert_eq!(series.samples(), &[1.5, 2.5, 0.5]);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn overflow_fails_loudly_without_overwriting() {
        let mut series = SampleSeries::with_capacity(1);
        series.record(1.0).unwrap();

        let err = series.record(2.0).unwrap_err();
        assert_eq!(err, SeriesError::CapacityExceeded { capacity: 1 });
        assert_eq!(series.samples(), &[1.0]);
    }

    #[test]
    fn zero_capacity_rejects_any_record() {
        let mut series = SampleSeries::with_capacity(0);
        assert!(series.record(1.0).is_err());
        assert!(series.is_empty());
    }
}
