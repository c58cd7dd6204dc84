//! Weekly occupancy series and the normalizer that builds them.
//!
//! Providers hand over seven rows of hourly popularity in their own day order.
//! [`normalize`] rotates those rows onto the canonical Sunday-first week and
//! turns each flat row into an explicit hour-to-score mapping. Nothing is
//! scaled or filtered here; closed hours keep their zero score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;

/// Occupancy score for a single hour. Higher means busier.
pub type Score = f64;

/// Days in the canonical week.
pub const DAYS_PER_WEEK: usize = 7;

/// Hours in a day; a provider row may not be longer than this.
pub const HOURS_PER_DAY: usize = 24;

/// Score the provider reports for hours when the place is closed or has no data.
pub const CLOSED_SCORE: Score = 0.0;

/// Rotation that moves the provider's trailing Sunday row to the front.
pub const PROVIDER_FIRST_DAY_OFFSET: i32 = 1;

/// One day of raw provider data, in the provider's payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    /// Day label as supplied by the provider
    pub name: String,
    /// Hourly scores, index = hour of day
    pub data: Vec<Score>,
}

impl RawDay {
    pub fn new(name: impl Into<String>, data: Vec<Score>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A single hour and its occupancy score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourScore {
    pub hour: u8,
    pub score: Score,
}

impl HourScore {
    pub fn new(hour: u8, score: Score) -> Self {
        Self { hour, score }
    }

    /// Whether the place is presumed operating during this hour.
    pub fn is_open(&self) -> bool {
        self.score != CLOSED_SCORE
    }
}

/// Occupancy for one canonical day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySeries {
    label: String,
    hours: BTreeMap<u8, Score>,
}

impl DaySeries {
    fn from_row(label: &str, row: &[Score]) -> Self {
        let hours = row
            .iter()
            .enumerate()
            .map(|(hour, &score)| (hour as u8, score))
            .collect();

        Self {
            label: label.to_string(),
            hours,
        }
    }

    /// Provider label for the day. Diagnostics only; queries never read it.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full hour-to-score mapping, closed hours included.
    pub fn hours(&self) -> &BTreeMap<u8, Score> {
        &self.hours
    }

    /// Score at the given hour, if the source row covered it.
    pub fn score(&self, hour: u8) -> Option<Score> {
        self.hours.get(&hour).copied()
    }

    /// Number of hours covered by the source row.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Hours with a nonzero score, in hour order.
    pub fn open_hours(&self) -> impl Iterator<Item = HourScore> + '_ {
        self.hours
            .iter()
            .map(|(&hour, &score)| HourScore::new(hour, score))
            .filter(HourScore::is_open)
    }

    /// Whether every hour of the day is closed.
    pub fn is_closed(&self) -> bool {
        self.open_hours().next().is_none()
    }
}

/// Seven canonical days, Sunday first. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSeries {
    days: [DaySeries; DAYS_PER_WEEK],
}

impl WeekSeries {
    /// Normalize provider rows using the provider's Sunday-last convention.
    pub fn from_provider(raw_week: &[RawDay]) -> Result<Self, AnalysisError> {
        normalize(raw_week, PROVIDER_FIRST_DAY_OFFSET)
    }

    /// All days in canonical order.
    pub fn days(&self) -> &[DaySeries; DAYS_PER_WEEK] {
        &self.days
    }

    /// Day at a canonical index (0 = Sunday).
    pub fn day(&self, day: u8) -> Result<&DaySeries, AnalysisError> {
        self.days
            .get(day as usize)
            .ok_or(AnalysisError::InvalidDay { day })
    }

    /// Whether no day of the week has an open hour.
    pub fn is_fully_closed(&self) -> bool {
        self.days.iter().all(DaySeries::is_closed)
    }
}

/// Rotate a raw provider week onto canonical order and map every row to hours.
///
/// `raw_first_day_offset` is the number of positions to rotate right so that
/// the canonical first day lands at index 0. It is taken modulo 7, so negative
/// values rotate left.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedInput`] if the week does not have seven
/// rows, if row lengths differ, if a row is longer than 24 hours, or if any
/// score is negative or not finite.
pub fn normalize(
    raw_week: &[RawDay],
    raw_first_day_offset: i32,
) -> Result<WeekSeries, AnalysisError> {
    if raw_week.len() != DAYS_PER_WEEK {
        return Err(AnalysisError::malformed(format!(
            "expected {DAYS_PER_WEEK} days, got {}",
            raw_week.len()
        )));
    }

    let expected_len = raw_week[0].data.len();
    if expected_len > HOURS_PER_DAY {
        return Err(AnalysisError::malformed(format!(
            "day '{}' has {expected_len} hourly values, at most {HOURS_PER_DAY} allowed",
            raw_week[0].name
        )));
    }

    for raw_day in raw_week {
        if raw_day.data.len() != expected_len {
            return Err(AnalysisError::malformed(format!(
                "day '{}' has {} hourly values, expected {expected_len}",
                raw_day.name,
                raw_day.data.len()
            )));
        }
        if let Some((hour, score)) = raw_day
            .data
            .iter()
            .enumerate()
            .find(|(_, score)| !score.is_finite() || **score < 0.0)
        {
            return Err(AnalysisError::malformed(format!(
                "day '{}' hour {hour} has unusable score {score}",
                raw_day.name
            )));
        }
    }

    let mut rotated: Vec<&RawDay> = raw_week.iter().collect();
    let shift = raw_first_day_offset.rem_euclid(DAYS_PER_WEEK as i32) as usize;
    rotated.rotate_right(shift);

    debug!(
        shift,
        first_day = %rotated[0].name,
        hours_per_day = expected_len,
        "normalized weekly occupancy"
    );

    let days = std::array::from_fn(|day| {
        let raw_day = rotated[day];
        DaySeries::from_row(&raw_day.name, &raw_day.data)
    });

    Ok(WeekSeries { days })
}
