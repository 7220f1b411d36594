//! A single timestamped vehicle-count observation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One half-hourly traffic observation: a local timestamp and the number of
/// cars seen in the interval starting at that timestamp.
///
/// Observations are immutable after construction. Ordering between
/// observations is defined by timestamp only.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tva_rust::models::Observation;
///
/// let timestamp = NaiveDate::from_ymd_opt(2021, 12, 1)
///     .unwrap()
///     .and_hms_opt(5, 0, 0)
///     .unwrap();
/// let obs = Observation::new(timestamp, 5);
///
/// assert_eq!(obs.cars(), 5);
/// assert_eq!(obs.date(), NaiveDate::from_ymd_opt(2021, 12, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    timestamp: NaiveDateTime,
    cars: u32,
}

impl Observation {
    /// Create a new observation.
    pub fn new(timestamp: NaiveDateTime, cars: u32) -> Self {
        Self { timestamp, cars }
    }

    /// The start of the observed interval.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Number of cars seen in the interval.
    pub fn cars(&self) -> u32 {
        self.cars
    }

    /// Calendar date the observation falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
