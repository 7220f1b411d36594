//! Error types for analytical queries.

use thiserror::Error;

/// Result type for analytical queries.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur when running analytical queries.
///
/// Configuration problems and insufficient data are distinct variants so a
/// caller can tell "bad parameters" apart from "parameters fine, data
/// insufficient".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The requested period/gap combination is unusable: non-positive, or
    /// the period is not an exact multiple of the gap.
    #[error("Invalid window configuration: period [{period}] hours is not a positive exact multiple of gap [{gap}] hours")]
    InvalidWindowSpec { period: f64, gap: f64 },

    /// The series holds no run of `window_size` observations spaced exactly
    /// `gap` hours apart.
    #[error("No run of {window_size} observations spaced {gap} hours apart exists in the series")]
    NoValidWindow { window_size: usize, gap: f64 },
}
