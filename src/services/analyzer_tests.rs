#[cfg(test)]
mod tests {
    use crate::models::Observation;
    use crate::services::analyzer::{cars_by_day, least_cars, most_cars, total_cars};
    use crate::services::error::AnalysisError;
    use chrono::{Duration, NaiveDateTime};
    use proptest::prelude::*;

    fn obs(timestamp: &str, cars: u32) -> Observation {
        Observation::new(
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S").unwrap(),
            cars,
        )
    }

    fn sample_series() -> Vec<Observation> {
        vec![
            obs("2021-12-01T05:00:00", 5),
            obs("2021-12-01T05:30:00", 12),
            obs("2021-12-01T06:00:00", 14),
            obs("2021-12-01T23:30:00", 0),
            obs("2021-12-05T09:30:00", 18),
            obs("2021-12-05T10:30:00", 15),
        ]
    }

    #[test]
    fn test_total_cars() {
        assert_eq!(total_cars(&sample_series()), 64);
    }

    #[test]
    fn test_total_cars_empty() {
        assert_eq!(total_cars(&[]), 0);
    }

    #[test]
    fn test_cars_by_day_sums_and_orders() {
        let totals = cars_by_day(&sample_series());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date.to_string(), "2021-12-01");
        assert_eq!(totals[0].cars, 31);
        assert_eq!(totals[1].date.to_string(), "2021-12-05");
        assert_eq!(totals[1].cars, 33);
    }

    #[test]
    fn test_cars_by_day_preserves_first_seen_order() {
        // Day 05 appears first in the input even though it is later in time.
        let series = vec![
            obs("2021-12-05T09:30:00", 18),
            obs("2021-12-01T05:00:00", 5),
            obs("2021-12-05T10:30:00", 15),
        ];
        let totals = cars_by_day(&series);
        assert_eq!(totals[0].date.to_string(), "2021-12-05");
        assert_eq!(totals[0].cars, 33);
        assert_eq!(totals[1].date.to_string(), "2021-12-01");
        assert_eq!(totals[1].cars, 5);
    }

    #[test]
    fn test_most_cars_descending() {
        let top = most_cars(&sample_series(), 3);
        let counts: Vec<u32> = top.iter().map(|o| o.cars()).collect();
        assert_eq!(counts, vec![18, 15, 14]);
    }

    #[test]
    fn test_most_cars_stable_ties_keep_input_order() {
        let series = vec![
            obs("2021-12-01T05:00:00", 10),
            obs("2021-12-01T06:00:00", 10),
            obs("2021-12-01T07:00:00", 10),
        ];
        let top = most_cars(&series, 2);
        assert_eq!(top[0].timestamp().to_string(), "2021-12-01 05:00:00");
        assert_eq!(top[1].timestamp().to_string(), "2021-12-01 06:00:00");
    }

    #[test]
    fn test_most_cars_count_beyond_length_returns_all() {
        assert_eq!(most_cars(&sample_series(), 100).len(), 6);
    }

    #[test]
    fn test_most_cars_zero_count() {
        assert!(most_cars(&sample_series(), 0).is_empty());
    }

    #[test]
    fn test_most_cars_empty_series() {
        assert!(most_cars(&[], 3).is_empty());
    }

    #[test]
    fn test_least_cars_sorts_input_before_scanning() {
        // Unsorted ingestion order; sorted by time this is four hourly
        // observations [10, 20, 5, 15], so the least 2-hour window is (5,15).
        let series = vec![
            obs("2021-12-01T07:00:00", 5),
            obs("2021-12-01T05:00:00", 10),
            obs("2021-12-01T08:00:00", 15),
            obs("2021-12-01T06:00:00", 20),
        ];
        let window = least_cars(&series, 2.0, 1.0).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].timestamp().to_string(), "2021-12-01 07:00:00");
        assert_eq!(window[0].cars(), 5);
        assert_eq!(window[1].cars(), 15);
    }

    #[test]
    fn test_least_cars_rejects_indivisible_period() {
        let err = least_cars(&sample_series(), 90.0, 40.0).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidWindowSpec {
                period: 90.0,
                gap: 40.0
            }
        );
    }

    #[test]
    fn test_least_cars_reports_insufficient_data() {
        let series = vec![obs("2021-12-01T05:00:00", 5)];
        assert!(matches!(
            least_cars(&series, 2.0, 1.0),
            Err(AnalysisError::NoValidWindow { .. })
        ));
    }

    #[test]
    fn test_least_cars_is_idempotent() {
        let series = sample_series();
        let first = least_cars(&series, 1.0, 0.5).unwrap();
        let second = least_cars(&series, 1.0, 0.5).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        /// The total over the whole report always equals the sum of the
        /// per-day totals, whatever the cadence.
        #[test]
        fn prop_total_matches_daily_sums(counts in prop::collection::vec(0u32..1000, 0..64)) {
            let epoch =
                NaiveDateTime::parse_from_str("2021-12-01T22:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
            let series: Vec<Observation> = counts
                .iter()
                .enumerate()
                .map(|(i, &cars)| {
                    Observation::new(epoch + Duration::minutes(30 * i as i64), cars)
                })
                .collect();

            let daily_sum: u64 = cars_by_day(&series).iter().map(|d| d.cars).sum();
            prop_assert_eq!(total_cars(&series), daily_sum);
        }

        /// Top-K length is min(k, n) and counts are non-increasing.
        #[test]
        fn prop_most_cars_sorted_and_bounded(
            counts in prop::collection::vec(0u32..1000, 0..64),
            k in 0usize..80,
        ) {
            let epoch =
                NaiveDateTime::parse_from_str("2021-12-01T05:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
            let series: Vec<Observation> = counts
                .iter()
                .enumerate()
                .map(|(i, &cars)| {
                    Observation::new(epoch + Duration::minutes(30 * i as i64), cars)
                })
                .collect();

            let top = most_cars(&series, k);
            prop_assert_eq!(top.len(), k.min(series.len()));
            for pair in top.windows(2) {
                prop_assert!(pair[0].cars() >= pair[1].cars());
            }
        }
    }
}
