//! Query facade over a series of traffic observations.
//!
//! Queries are pure functions of the input slice: nothing is cached between
//! calls and the input is never mutated. The least-cars query validates its
//! window configuration and time-sorts a working copy before delegating to
//! the scanner in [`super::window_scan`].

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::models::Observation;
use crate::services::error::AnalysisResult;
use crate::services::window_scan::{self, WindowSpec};

/// Total cars seen on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub cars: u64,
}

/// The number of cars seen in total across the whole report.
pub fn total_cars(observations: &[Observation]) -> u64 {
    info!(
        "Computing total cars over {} observations",
        observations.len()
    );
    observations.iter().map(|obs| u64::from(obs.cars())).sum()
}

/// Per-day car totals, in first-seen day order.
///
/// Observations sharing a calendar date are summed; days appear in the order
/// their first observation appears in the input.
pub fn cars_by_day(observations: &[Observation]) -> Vec<DailyTotal> {
    info!(
        "Computing cars by day over {} observations",
        observations.len()
    );
    let mut totals: Vec<DailyTotal> = Vec::new();
    let mut day_index: HashMap<NaiveDate, usize> = HashMap::new();

    for obs in observations {
        match day_index.get(&obs.date()) {
            Some(&index) => totals[index].cars += u64::from(obs.cars()),
            None => {
                day_index.insert(obs.date(), totals.len());
                totals.push(DailyTotal {
                    date: obs.date(),
                    cars: u64::from(obs.cars()),
                });
            }
        }
    }
    totals
}

/// The `count` observations with the most cars, descending by count.
///
/// The sort is stable, so observations with equal counts keep their input
/// order. If `count` exceeds the series length, the whole series is returned.
pub fn most_cars(observations: &[Observation], count: usize) -> Vec<Observation> {
    info!(
        "Retrieving top {} of {} observations by car count",
        count,
        observations.len()
    );
    let mut ranked: Vec<Observation> = observations.to_vec();
    ranked.sort_by(|a, b| b.cars().cmp(&a.cars()));
    ranked.truncate(count);
    ranked
}

/// The contiguous run of evenly-spaced observations spanning `period` hours
/// at `gap`-hour spacing with the fewest cars, in timestamp order.
///
/// On tied minimal sums the earliest-starting window wins. Fails with
/// [`crate::services::AnalysisError::InvalidWindowSpec`] when `period` is not
/// a positive exact multiple of `gap`, and with
/// [`crate::services::AnalysisError::NoValidWindow`] when the series holds no
/// full-size evenly-spaced run.
pub fn least_cars(
    observations: &[Observation],
    period: f64,
    gap: f64,
) -> AnalysisResult<Vec<Observation>> {
    let spec = WindowSpec::new(period, gap)?;
    info!(
        "Scanning {} observations for the least-cars {} hour window at {} hour spacing",
        observations.len(),
        period,
        gap
    );

    let mut sorted: Vec<Observation> = observations.to_vec();
    sorted.sort_by_key(|obs| obs.timestamp());

    let start = window_scan::scan_least_window(&sorted, &spec)?;
    Ok(sorted[start..start + spec.window_size()].to_vec())
}
