//! Sliding-window least-sum search with gap validation.
//!
//! Given a time-sorted series of observations and a [`WindowSpec`], find the
//! start of the run of `window_size` consecutive observations, spaced exactly
//! `gap` hours apart, whose summed car count is minimal. "Consecutive" is
//! meant in the valid-sequence sense: any adjacent pair whose time delta
//! deviates from the expected gap (a missing or irregular sample) invalidates
//! the run in progress, and the scan re-anchors past the offending pair.
//!
//! The scan is a single forward pass. A FIFO carries the indices of the run
//! currently believed valid, so adjacent-pair checks survive the slide from
//! one start to the next, and a resync pointer marks how far the series has
//! already been inspected so a gap violation is never re-examined. This keeps
//! the scan amortized O(n) where naive re-validation per start would be
//! O(n * window_size), with memory bounded by one window's worth of indices.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::Observation;
use crate::services::error::{AnalysisError, AnalysisResult};

/// Shape of a least-cars window query: the total period covered by a window
/// and the expected spacing between its observations, both in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    period: f64,
    gap: f64,
}

impl WindowSpec {
    /// Validate and build a window spec.
    ///
    /// `period` and `gap` must both be strictly positive and `period` must be
    /// an exact multiple of `gap`; anything else is a configuration error,
    /// never a silent rounding.
    pub fn new(period: f64, gap: f64) -> AnalysisResult<Self> {
        if !(period > 0.0) || !(gap > 0.0) || period % gap != 0.0 {
            return Err(AnalysisError::InvalidWindowSpec { period, gap });
        }
        let spec = Self { period, gap };
        if spec.window_size() == 0 {
            return Err(AnalysisError::InvalidWindowSpec { period, gap });
        }
        Ok(spec)
    }

    /// Window period in hours.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Expected spacing between adjacent observations, in hours.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of observations per window.
    pub fn window_size(&self) -> usize {
        (self.period / self.gap).round() as usize
    }

    /// Expected spacing between adjacent observations, in whole minutes.
    fn gap_minutes(&self) -> i64 {
        (self.gap * 60.0).round() as i64
    }
}

/// Find the start index of the least-sum valid window.
///
/// `observations` must be sorted ascending by timestamp. Returns the start
/// index of the first window whose sum is minimal among all valid windows,
/// or [`AnalysisError::NoValidWindow`] when no full-size evenly-spaced run
/// exists anywhere in the series.
pub fn scan_least_window(
    observations: &[Observation],
    spec: &WindowSpec,
) -> AnalysisResult<usize> {
    let window_size = spec.window_size();
    let gap_minutes = spec.gap_minutes();
    let no_valid_window = AnalysisError::NoValidWindow {
        window_size,
        gap: spec.gap(),
    };

    if observations.len() < window_size {
        return Err(no_valid_window);
    }

    let mut best_start: Option<usize> = None;
    let mut best_sum = u64::MAX;

    // Indices of the run currently believed valid. Entries are contiguous
    // and every adjacent pair has already passed the gap check.
    let mut window: VecDeque<usize> = VecDeque::with_capacity(window_size);
    // Furthest index already inspected for gap validity.
    let mut resync = 0usize;

    for start in 0..=(observations.len() - window_size) {
        // A violation found while filling an earlier window already
        // disqualified every start up to the resync pointer.
        if resync > start && window.len() + 1 < window_size {
            debug!("Start index {} already disqualified, skipping", start);
            continue;
        }

        if window.is_empty() {
            window.push_back(start);
            resync = start;
        }

        let mut violated = false;
        while window.len() < window_size {
            if delta_minutes(&observations[resync], &observations[resync + 1]) != gap_minutes {
                // Re-anchor past the offending pair and abandon this start.
                resync += 1;
                window.clear();
                violated = true;
                break;
            }
            resync += 1;
            window.push_back(resync);
        }
        if violated {
            continue;
        }

        let sum: u64 = window
            .iter()
            .map(|&index| u64::from(observations[index].cars()))
            .sum();
        if sum < best_sum {
            best_sum = sum;
            best_start = Some(start);
        }

        // Slide: drop the oldest entry so the next start reuses the rest.
        window.pop_front();
    }

    best_start.ok_or(no_valid_window)
}

fn delta_minutes(earlier: &Observation, later: &Observation) -> i64 {
    (later.timestamp() - earlier.timestamp()).num_minutes()
}
