//! # TVA Rust Backend
//!
//! Traffic volume analysis engine.
//!
//! This crate ingests a time-ordered series of half-hourly vehicle-count
//! observations and answers analytical queries over them: total volume,
//! per-day volume, the top-K busiest intervals, and the least-busy
//! contiguous multi-interval window of a given duration.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core domain types ([`models::Observation`])
//! - [`parsing`]: Ingestion of raw traffic report lines and files
//! - [`services`]: Analytical queries, including the sliding-window
//!   least-cars search with gap validation
//!
//! ## Example
//!
//! ```
//! use tva_rust::parsing::report_parser;
//! use tva_rust::services;
//!
//! let observations = report_parser::parse_report_str(
//!     "2021-12-01T05:00:00 5\n2021-12-01T05:30:00 12",
//! )
//! .expect("valid report");
//!
//! assert_eq!(services::total_cars(&observations), 17);
//! ```

pub mod models;

pub mod parsing;

pub mod services;
