//! Traffic report analyzer CLI.
//!
//! Reads a traffic report file and prints the standard analysis: total cars,
//! cars per day, the top 3 half hours with most cars, and the 1.5 hour
//! period with least cars.
//!
//! # Usage
//!
//! ```bash
//! tva-analyzer <report-file> [--json]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tva_rust::models::Observation;
use tva_rust::parsing::report_parser;
use tva_rust::services::{self, DailyTotal};

const TOP_RESULTS: usize = 3;
const LEAST_PERIOD_HOURS: f64 = 1.5;
const LEAST_GAP_HOURS: f64 = 0.5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Full analysis of one traffic report.
#[derive(Debug, Serialize)]
struct Report {
    total_cars: u64,
    cars_by_day: Vec<DailyTotal>,
    most_cars: Vec<Observation>,
    least_cars: Vec<Observation>,
}

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(false)
        .init();

    let mut json_output = false;
    let mut report_path: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            other => report_path = Some(PathBuf::from(other)),
        }
    }
    let report_path = match report_path {
        Some(path) => path,
        None => bail!("Usage: tva-analyzer <report-file> [--json]"),
    };

    let observations = report_parser::parse_report_file(&report_path)?;
    info!(
        "Loaded {} observations from {}",
        observations.len(),
        report_path.display()
    );

    let report = Report {
        total_cars: services::total_cars(&observations),
        cars_by_day: services::cars_by_day(&observations),
        most_cars: services::most_cars(&observations, TOP_RESULTS),
        least_cars: services::least_cars(&observations, LEAST_PERIOD_HOURS, LEAST_GAP_HOURS)?,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Total Number of Cars : {}", report.total_cars);

    println!("\nNumber of Cars by Day :");
    for day in &report.cars_by_day {
        println!("{} {}", day.date, day.cars);
    }

    println!("\nThe Top {} Half Hours with Most Cars :", TOP_RESULTS);
    for obs in &report.most_cars {
        println!("{} {}", obs.timestamp().format(TIMESTAMP_FORMAT), obs.cars());
    }

    println!("\nThe {} Hour Period with Least Cars :", LEAST_PERIOD_HOURS);
    for obs in &report.least_cars {
        println!("{} {}", obs.timestamp().format(TIMESTAMP_FORMAT), obs.cars());
    }

    Ok(())
}
