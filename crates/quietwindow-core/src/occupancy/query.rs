//! Least-busy hour queries over a normalized week.
//!
//! Closed hours (score 0) are never recommended: a zero there means the place
//! is not operating, not that it is empty.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::week::{HourScore, WeekSeries, DAYS_PER_WEEK};
use crate::error::AnalysisError;

/// A recommended day with its least busy hours, quietest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTimeResult {
    /// Canonical day index (0-6, Sunday=0)
    pub day: u8,
    /// Ranked hours, ascending score
    pub entries: Vec<HourScore>,
}

impl BestTimeResult {
    /// The quietest entry.
    pub fn best(&self) -> Option<&HourScore> {
        self.entries.first()
    }
}

/// Ascending score, then ascending hour.
fn by_score_then_hour(a: &HourScore, b: &HourScore) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.hour.cmp(&b.hour))
}

/// The `n` least busy open hours of a day, quietest first.
///
/// Returns fewer than `n` entries when the day has fewer open hours, and an
/// empty list when the day is fully closed.
///
/// # Errors
///
/// [`AnalysisError::InvalidDay`] when `day` is outside 0-6,
/// [`AnalysisError::InvalidCount`] when `n` is zero.
pub fn best_hours_for_day(
    week: &WeekSeries,
    day: u8,
    n: usize,
) -> Result<Vec<HourScore>, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::InvalidCount);
    }
    let series = week.day(day)?;

    let mut ranked: Vec<HourScore> = series.open_hours().collect();
    ranked.sort_by(by_score_then_hour);
    ranked.truncate(n);

    trace!(day, n, found = ranked.len(), "ranked open hours");
    Ok(ranked)
}

/// Like [`best_hours_for_day`], but a fully closed day is an error.
///
/// # Errors
///
/// [`AnalysisError::NoOpenHours`] carrying the day when nothing is open, plus
/// the errors of [`best_hours_for_day`].
pub fn best_time_for_day(
    week: &WeekSeries,
    day: u8,
    n: usize,
) -> Result<BestTimeResult, AnalysisError> {
    let entries = best_hours_for_day(week, day, n)?;
    if entries.is_empty() {
        return Err(AnalysisError::NoOpenHours { day: Some(day) });
    }
    Ok(BestTimeResult { day, entries })
}

/// The `n` least busy open hours for every day of the week, Sunday first.
///
/// # Errors
///
/// [`AnalysisError::InvalidCount`] when `n` is zero.
pub fn best_hours_by_day(
    week: &WeekSeries,
    n: usize,
) -> Result<[Vec<HourScore>; DAYS_PER_WEEK], AnalysisError> {
    let mut per_day: [Vec<HourScore>; DAYS_PER_WEEK] = Default::default();
    for (day, slot) in per_day.iter_mut().enumerate() {
        *slot = best_hours_for_day(week, day as u8, n)?;
    }
    Ok(per_day)
}

/// The single least busy open hour of the whole week.
///
/// Ties go to the earliest day, then the earliest hour.
///
/// # Errors
///
/// [`AnalysisError::NoOpenHours`] when every day is fully closed.
pub fn best_hour_of_week(week: &WeekSeries) -> Result<BestTimeResult, AnalysisError> {
    let per_day = best_hours_by_day(week, 1)?;

    let mut best: Option<(u8, HourScore)> = None;
    for (day, top) in per_day.iter().enumerate() {
        let Some(candidate) = top.first() else {
            continue;
        };
        // Strict comparison keeps the earlier day on ties.
        let better = match &best {
            None => true,
            Some((_, current)) => candidate.score < current.score,
        };
        if better {
            best = Some((day as u8, *candidate));
        }
    }

    let (day, entry) = best.ok_or(AnalysisError::NoOpenHours { day: None })?;
    debug!(day, hour = entry.hour, score = entry.score, "least busy hour of the week");

    Ok(BestTimeResult {
        day,
        entries: vec![entry],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::week::{normalize, RawDay};

    /// Canonical-order week (offset 0) with every hour closed.
    fn closed_rows() -> Vec<RawDay> {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
            .iter()
            .map(|name| RawDay::new(*name, vec![0.0; 24]))
            .collect()
    }

    fn week_from(rows: Vec<RawDay>) -> WeekSeries {
        normalize(&rows, 0).unwrap()
    }

    #[test]
    fn test_best_hours_excludes_closed() {
        let mut rows = closed_rows();
        rows[1].data[9] = 40.0;
        rows[1].data[10] = 20.0;
        let week = week_from(rows);

        let best = best_hours_for_day(&week, 1, 5).unwrap();
        assert_eq!(best, vec![HourScore::new(10, 20.0), HourScore::new(9, 40.0)]);
        assert!(best.iter().all(HourScore::is_open));
    }

    #[test]
    fn test_best_hours_tie_breaks_on_hour() {
        let mut rows = closed_rows();
        rows[3].data[15] = 30.0;
        rows[3].data[8] = 30.0;
        rows[3].data[12] = 10.0;
        let week = week_from(rows);

        let best = best_hours_for_day(&week, 3, 3).unwrap();
        let hours: Vec<u8> = best.iter().map(|e| e.hour).collect();
        assert_eq!(hours, vec![12, 8, 15]);
    }

    #[test]
    fn test_best_hours_fewer_than_requested() {
        let mut rows = closed_rows();
        rows[2].data[9] = 5.0;
        rows[2].data[17] = 7.5;
        let week = week_from(rows);

        let best = best_hours_for_day(&week, 2, 3).unwrap();
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn test_best_hours_closed_day_is_empty() {
        let week = week_from(closed_rows());
        assert!(best_hours_for_day(&week, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_best_hours_rejects_bad_day_and_count() {
        let week = week_from(closed_rows());
        assert_eq!(
            best_hours_for_day(&week, 7, 1),
            Err(AnalysisError::InvalidDay { day: 7 })
        );
        assert_eq!(
            best_hours_for_day(&week, 0, 0),
            Err(AnalysisError::InvalidCount)
        );
    }

    #[test]
    fn test_best_time_for_closed_day_fails() {
        let mut rows = closed_rows();
        rows[5].data[11] = 3.0;
        let week = week_from(rows);

        assert_eq!(
            best_time_for_day(&week, 0, 1),
            Err(AnalysisError::NoOpenHours { day: Some(0) })
        );

        let friday = best_time_for_day(&week, 5, 2).unwrap();
        assert_eq!(friday.day, 5);
        assert_eq!(friday.best(), Some(&HourScore::new(11, 3.0)));
    }

    #[test]
    fn test_best_hours_by_day_covers_week() {
        let mut rows = closed_rows();
        rows[4].data[13] = 9.0;
        let week = week_from(rows);

        let per_day = best_hours_by_day(&week, 1).unwrap();
        assert_eq!(per_day.len(), 7);
        assert!(per_day[0].is_empty());
        assert_eq!(per_day[4], vec![HourScore::new(13, 9.0)]);
    }

    #[test]
    fn test_best_hour_of_week_picks_global_minimum() {
        let mut rows = closed_rows();
        rows[1].data[9] = 22.0;
        rows[3].data[18] = 11.0;
        rows[6].data[10] = 15.0;
        let week = week_from(rows);

        let result = best_hour_of_week(&week).unwrap();
        assert_eq!(result.day, 3);
        assert_eq!(result.entries, vec![HourScore::new(18, 11.0)]);
    }

    #[test]
    fn test_best_hour_of_week_ties_keep_earliest_day() {
        let mut rows = closed_rows();
        rows[2].data[14] = 10.0;
        rows[5].data[7] = 10.0;
        let week = week_from(rows);

        let result = best_hour_of_week(&week).unwrap();
        assert_eq!(result.day, 2);
        assert_eq!(result.entries[0].hour, 14);
    }

    #[test]
    fn test_best_hour_of_week_fully_closed() {
        let week = week_from(closed_rows());
        assert_eq!(
            best_hour_of_week(&week),
            Err(AnalysisError::NoOpenHours { day: None })
        );
    }

    #[test]
    fn test_fractional_scores_rank() {
        let mut rows = closed_rows();
        rows[0].data[9] = 0.5;
        rows[0].data[10] = 0.25;
        let week = week_from(rows);

        let result = best_hour_of_week(&week).unwrap();
        assert_eq!(result.entries, vec![HourScore::new(10, 0.25)]);
    }
}
