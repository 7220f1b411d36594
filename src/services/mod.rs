//! Service layer: analytical queries over traffic observations.
//!
//! The [`analyzer`] module is the public query surface (total, per-day,
//! most-cars, least-cars). The [`window_scan`] module implements the
//! sliding-window least-sum search with gap validation that backs the
//! least-cars query.

pub mod analyzer;

pub mod error;

pub mod window_scan;

#[cfg(test)]
mod analyzer_tests;

pub use analyzer::{cars_by_day, least_cars, most_cars, total_cars, DailyTotal};
pub use error::{AnalysisError, AnalysisResult};
pub use window_scan::WindowSpec;
