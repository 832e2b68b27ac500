//! Statistical utilities for the Evotris project.
//!
//! This crate provides descriptive statistics (mean, median, variance,
//! standard deviation, etc.) used by the board-feature extractor, the
//! fitness aggregation, and the training progress reports.
//!
//! # Examples
//!
//! ```
//! use evotris_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
