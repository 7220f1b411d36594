//! Parsers for raw traffic report data.
//!
//! A traffic report is plain text with one observation per line, each line
//! holding an ISO-8601 local date-time and a non-negative car count
//! separated by whitespace:
//!
//! ```text
//! 2021-12-01T05:00:00 5
//! 2021-12-01T05:30:00 12
//! ```
//!
//! Malformed lines are fatal: parsing fails for the whole report rather than
//! recovering partially.

pub mod report_parser;


pub use report_parser::{parse_report_file, parse_report_str};
