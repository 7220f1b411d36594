use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

use crate::models::Observation;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a traffic report from a file.
pub fn parse_report_file(path: &Path) -> Result<Vec<Observation>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read traffic report: {}", path.display()))?;
    parse_report_str(&contents)
        .with_context(|| format!("Failed to parse traffic report: {}", path.display()))
}

/// Parse a traffic report from a string, one observation per non-empty line.
pub fn parse_report_str(input: &str) -> Result<Vec<Observation>> {
    let mut observations = Vec::new();
    for (line_index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let observation = parse_report_line(line)
            .with_context(|| format!("Invalid report entry on line {}: '{}'", line_index + 1, line))?;
        observations.push(observation);
    }
    Ok(observations)
}

/// Parse a single `<timestamp> <count>` report line.
fn parse_report_line(line: &str) -> Result<Observation> {
    let mut tokens = line.split_whitespace();
    let raw_timestamp = tokens.next().context("Missing timestamp field")?;
    let raw_cars = tokens.next().context("Missing car count field")?;
    if tokens.next().is_some() {
        bail!("Expected exactly two fields");
    }

    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT)
        .with_context(|| format!("Invalid timestamp '{}'", raw_timestamp))?;
    let cars: u32 = raw_cars
        .parse()
        .with_context(|| format!("Invalid car count '{}'", raw_cars))?;

    Ok(Observation::new(timestamp, cars))
}
