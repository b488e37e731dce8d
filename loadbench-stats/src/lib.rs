#![warn(missing_docs)]
//! LoadBench Statistical Engine
//!
//! Aggregates one completed per-backend sample series into summary
//! statistics. Deliberately small: mean, *population* variance (divides by
//! the sample count, not count − 1) and standard deviation, all pure
//! functions so the same series always yields the same report.

mod aggregate;

pub use aggregate::{mean, std_dev, variance, AggregateStats};
