//! Occupancy analysis module.
//!
//! Normalizes a provider's weekly popularity series into a canonical
//! Sunday-first week and answers least-busy hour queries against it.

mod query;
mod week;

pub use query::{
    best_hour_of_week, best_hours_by_day, best_hours_for_day, best_time_for_day, BestTimeResult,
};

pub use week::{
    normalize, DaySeries, HourScore, RawDay, Score, WeekSeries, CLOSED_SCORE, DAYS_PER_WEEK,
    HOURS_PER_DAY, PROVIDER_FIRST_DAY_OFFSET,
};

/// Canonical day index for a weekday (Sunday=0).
pub fn day_index(weekday: chrono::Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_day_index_is_sunday_based() {
        assert_eq!(day_index(Weekday::Sun), 0);
        assert_eq!(day_index(Weekday::Wed), 3);
        assert_eq!(day_index(Weekday::Sat), 6);
    }
}
