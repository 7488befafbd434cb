//! Device position acquisition.
//!
//! The host's geolocation capability sits behind [`Geolocator`]. Every call is
//! bounded by [`PositionOptions::timeout`] on our side as well, so a
//! geolocator that ignores the option still cannot stall a store.

mod geolocators;
mod store;

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dealspot_core::{AppConfig, TranslationKey, Translations};
use serde::{Deserialize, Serialize};

use crate::error::LocationError;

pub use geolocators::{FixedGeolocator, UnavailableGeolocator};
pub use store::LocationStore;

/// A resolved device position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Options passed through to the host capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached reading the host may return instead of a fresh one.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(5_000),
            maximum_age: Duration::ZERO,
        }
    }
}

impl PositionOptions {
    /// Options for the "current location" flow.
    #[must_use]
    pub fn primary(config: &AppConfig) -> Self {
        Self {
            high_accuracy: config.geo_high_accuracy,
            timeout: Duration::from_millis(config.geo_timeout_ms),
            maximum_age: Duration::from_millis(config.geo_max_age_ms),
        }
    }

    /// Options for the acquisition started from city selection.
    ///
    /// This flow never sets a maximum age, so the host's default applies.
    #[must_use]
    pub fn city_search(config: &AppConfig) -> Self {
        Self {
            high_accuracy: config.geo_high_accuracy,
            timeout: Duration::from_millis(config.city_geo_timeout_ms),
            maximum_age: Duration::ZERO,
        }
    }

    pub(crate) fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Host geolocation capability: a single "get current position" call.
pub trait Geolocator {
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Position, LocationError>> + Send;
}

/// Snapshot published by [`LocationStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationState {
    pub location: Option<Position>,
    pub error: Option<String>,
    pub loading: bool,
}

impl LocationState {
    /// Label for location-dependent UI: the coordinates when known, otherwise
    /// the localized "near you" placeholder.
    #[must_use]
    pub fn label(&self, translations: &Translations) -> String {
        match &self.location {
            Some(position) => position.coordinates().to_string(),
            None => translations.get(TranslationKey::NearYou).to_string(),
        }
    }
}

/// Run one acquisition bounded by `options.timeout`.
pub(crate) async fn acquire<G: Geolocator>(
    geolocator: &G,
    options: PositionOptions,
) -> Result<Position, LocationError> {
    match tokio::time::timeout(options.timeout, geolocator.current_position(options)).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout {
            timeout_ms: options.timeout_ms(),
        }),
    }
}
