//! # Quietwindow Core Library
//!
//! Finds the least busy time to visit a place from its weekly popularity
//! series. Network lookups are not part of this crate: callers hand in a
//! provider payload that has already been fetched, and get back a
//! `(day, hour)` recommendation.
//!
//! ## Key Components
//!
//! - [`normalize`]: rotates a provider week onto the canonical Sunday-first week
//! - [`best_hours_for_day`] / [`best_hour_of_week`]: least-busy hour queries
//! - [`Place`]: a place record built from a provider payload
//! - [`Config`]: analysis defaults stored as TOML
//!
//! ```
//! use quietwindow_core::{format_time, sample_place};
//!
//! let place = sample_place().unwrap();
//! let best = place.best_time().unwrap();
//! assert_eq!(format_time(best.entries[0].hour, Some(best.day)), "Monday, 9AM");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod occupancy;
pub mod place;

pub use config::Config;
pub use error::{AnalysisError, ConfigError, CoreError};
pub use format::{day_name, format_hour, format_time, render_week_ascii, DAY_NAMES};
pub use occupancy::{
    best_hour_of_week, best_hours_by_day, best_hours_for_day, best_time_for_day, day_index,
    normalize, BestTimeResult, DaySeries, HourScore, RawDay, Score, WeekSeries, CLOSED_SCORE,
    PROVIDER_FIRST_DAY_OFFSET,
};
pub use place::{sample_place, sample_provider_place, Coordinates, Place, ProviderPlace};
