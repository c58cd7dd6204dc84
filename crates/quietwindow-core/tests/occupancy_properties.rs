//! Property tests for normalization and least-busy queries.

use proptest::prelude::*;
use quietwindow_core::{
    best_hour_of_week, best_hours_by_day, best_hours_for_day, normalize, AnalysisError, RawDay,
};

/// Seven rows of the same length; roughly a third of the hours closed.
fn raw_week() -> impl Strategy<Value = Vec<RawDay>> {
    (1usize..=24).prop_flat_map(|len| {
        prop::collection::vec(
            prop::collection::vec(
                prop_oneof![1 => Just(0.0), 2 => (1u32..100).prop_map(f64::from)],
                len,
            ),
            7,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, data)| RawDay::new(format!("day-{i}"), data))
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn rotation_moves_last_row_first(raw in raw_week()) {
        let week = normalize(&raw, 1).unwrap();

        prop_assert_eq!(week.days()[0].label(), raw[6].name.as_str());
        for day in 1..7 {
            prop_assert_eq!(week.days()[day].label(), raw[day - 1].name.as_str());
        }
    }

    #[test]
    fn mapping_keeps_every_hour(raw in raw_week()) {
        let week = normalize(&raw, 1).unwrap();

        for day in 0..7usize {
            let source = &raw[(day + 6) % 7];
            let series = &week.days()[day];
            prop_assert_eq!(series.len(), source.data.len());
            for (hour, score) in source.data.iter().enumerate() {
                prop_assert_eq!(series.score(hour as u8), Some(*score));
            }
        }
    }

    #[test]
    fn best_hours_are_open_and_sorted(raw in raw_week(), day in 0u8..7, n in 1usize..30) {
        let week = normalize(&raw, 1).unwrap();
        let best = best_hours_for_day(&week, day, n).unwrap();

        let open = week.days()[day as usize].open_hours().count();
        prop_assert_eq!(best.len(), open.min(n));
        prop_assert!(best.iter().all(|e| e.score != 0.0));
        for pair in best.windows(2) {
            prop_assert!(
                pair[0].score < pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].hour < pair[1].hour)
            );
        }
    }

    #[test]
    fn week_best_is_the_minimum_open_hour(raw in raw_week()) {
        let week = normalize(&raw, 1).unwrap();
        let per_day = best_hours_by_day(&week, 1).unwrap();

        match best_hour_of_week(&week) {
            Ok(best) => {
                let entry = best.entries[0];
                for (day, top) in per_day.iter().enumerate() {
                    if let Some(other) = top.first() {
                        prop_assert!(entry.score <= other.score);
                        if other.score == entry.score {
                            prop_assert!(best.day as usize <= day);
                        }
                    }
                }
            }
            Err(err) => {
                prop_assert_eq!(err, AnalysisError::NoOpenHours { day: None });
                prop_assert!(week.is_fully_closed());
            }
        }
    }

    #[test]
    fn queries_are_idempotent(raw in raw_week(), day in 0u8..7) {
        let week = normalize(&raw, 1).unwrap();

        prop_assert_eq!(best_hours_for_day(&week, day, 3), best_hours_for_day(&week, day, 3));
        prop_assert_eq!(best_hour_of_week(&week), best_hour_of_week(&week));
    }

    #[test]
    fn out_of_range_day_is_rejected(raw in raw_week(), day in 7u8..=u8::MAX) {
        let week = normalize(&raw, 1).unwrap();
        prop_assert_eq!(
            best_hours_for_day(&week, day, 1),
            Err(AnalysisError::InvalidDay { day })
        );
    }
}
