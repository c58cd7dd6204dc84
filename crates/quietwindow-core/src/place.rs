//! Places of interest and their weekly popularity.
//!
//! Provider payloads arrive already fetched, in the `populartimes` JSON shape.
//! [`Place::from_provider`] normalizes the popularity rows once; everything
//! after that is a read-only query.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::occupancy::{
    best_hour_of_week, best_hours_for_day, normalize, BestTimeResult, HourScore, RawDay,
    WeekSeries, PROVIDER_FIRST_DAY_OFFSET,
};

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Place details as delivered by the popularity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPlace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub types: Vec<String>,
    /// Seven rows in provider order; absent when the provider has no data
    #[serde(default)]
    pub populartimes: Option<Vec<RawDay>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_n: Option<u64>,
}

/// A place with a normalized weekly occupancy series.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub types: Vec<String>,
    pub popularity: WeekSeries,
    pub rating: Option<f64>,
    pub rating_n: Option<u64>,
}

impl Place {
    /// Build a place from a provider payload, normalizing its popularity.
    ///
    /// # Errors
    ///
    /// [`CoreError::NoPopularityData`] if the payload has no popularity rows,
    /// [`CoreError::Analysis`] if the rows are malformed.
    pub fn from_provider(provider: ProviderPlace) -> Result<Self> {
        Self::from_provider_with_offset(provider, PROVIDER_FIRST_DAY_OFFSET)
    }

    /// Like [`Place::from_provider`] for providers with a different day order.
    pub fn from_provider_with_offset(
        provider: ProviderPlace,
        raw_first_day_offset: i32,
    ) -> Result<Self> {
        let raw_week = provider
            .populartimes
            .ok_or_else(|| CoreError::NoPopularityData {
                place: provider.name.clone(),
            })?;
        let popularity = normalize(&raw_week, raw_first_day_offset)?;

        debug!(
            place_id = %provider.id,
            name = %provider.name,
            raw_first_day_offset,
            "loaded place"
        );

        Ok(Self {
            place_id: provider.id,
            name: provider.name,
            address: provider.address,
            coordinates: provider.coordinates,
            types: provider.types,
            popularity,
            rating: provider.rating,
            rating_n: provider.rating_n,
        })
    }

    /// Parse a provider JSON payload and build the place.
    ///
    /// # Errors
    ///
    /// [`CoreError::Json`] for unparseable payloads, otherwise as
    /// [`Place::from_provider`].
    pub fn from_json(json: &str) -> Result<Self> {
        let provider: ProviderPlace = serde_json::from_str(json)?;
        Self::from_provider(provider)
    }

    /// The least busy open hour of the week.
    pub fn best_time(&self) -> Result<BestTimeResult> {
        Ok(best_hour_of_week(&self.popularity)?)
    }

    /// The `n` least busy open hours on a canonical day.
    pub fn best_times_for_day(&self, day: u8, n: usize) -> Result<Vec<HourScore>> {
        Ok(best_hours_for_day(&self.popularity, day, n)?)
    }
}

fn fmt_optional<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// `[("Sunday", [0, 0, ...]), ...]`, one entry per canonical day.
fn fmt_popularity(week: &WeekSeries) -> String {
    let days: Vec<String> = week
        .days()
        .iter()
        .map(|day| {
            let scores: Vec<String> = day.hours().values().map(|s| s.to_string()).collect();
            format!("({:?}, [{}])", day.label(), scores.join(", "))
        })
        .collect();
    format!("[{}]", days.join(", "))
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Place({:?}, {:?}, {:?}, ({}, {}), {:?}, {}, {}, {})",
            self.place_id,
            self.name,
            self.address,
            self.coordinates.lat,
            self.coordinates.lng,
            self.types,
            fmt_popularity(&self.popularity),
            fmt_optional(&self.rating),
            fmt_optional(&self.rating_n),
        )
    }
}

/// Provider payload for the built-in sample: a grocery store in Eugene, OR.
pub fn sample_provider_place() -> ProviderPlace {
    let closed_morning = [0.0; 9];
    let row = |name: &str, open: &[f64]| {
        let mut data = closed_morning.to_vec();
        data.extend_from_slice(open);
        data.resize(24, 0.0);
        RawDay::new(name, data)
    };

    ProviderPlace {
        id: "ChIJKwYiKvzhwFQRbQAN2nAbtkI".to_string(),
        name: "Trader Joe's".to_string(),
        address: "85 Oakway Center, Eugene, OR 97401, USA".to_string(),
        coordinates: Coordinates {
            lat: 44.0662723,
            lng: -123.0752647,
        },
        types: [
            "grocery_or_supermarket",
            "florist",
            "supermarket",
            "liquor_store",
            "food",
            "health",
            "point_of_interest",
            "store",
            "establishment",
        ]
        .iter()
        .map(|t| t.to_string())
        .collect(),
        populartimes: Some(vec![
            row("Monday", &[22.0, 37.0, 53.0, 61.0, 61.0, 58.0, 61.0, 72.0, 78.0, 68.0]),
            row("Tuesday", &[31.0, 45.0, 58.0, 64.0, 61.0, 53.0, 46.0, 47.0, 52.0, 48.0]),
            row("Wednesday", &[23.0, 30.0, 36.0, 39.0, 44.0, 57.0, 51.0, 34.0, 30.0]),
            row("Thursday", &[24.0, 36.0, 46.0, 54.0, 55.0, 53.0, 49.0, 48.0, 45.0, 38.0]),
            row("Friday", &[37.0, 50.0, 59.0, 63.0, 62.0, 59.0, 58.0, 59.0, 57.0, 46.0]),
            row("Saturday", &[38.0, 56.0, 72.0, 83.0, 88.0, 88.0, 86.0, 82.0, 68.0, 45.0]),
            row("Sunday", &[]),
        ]),
        rating: Some(4.5),
        rating_n: Some(1003),
    }
}

/// The built-in sample place, usable without any provider access.
pub fn sample_place() -> Result<Place> {
    Place::from_provider(sample_provider_place())
}
