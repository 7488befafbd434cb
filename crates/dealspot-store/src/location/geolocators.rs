use std::future::Future;

use chrono::Utc;
use dealspot_core::FixedPosition;

use super::{Geolocator, Position, PositionOptions};
use crate::error::LocationError;

/// Always answers with the same coordinates, stamped with the current time.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: FixedPosition,
}

impl FixedGeolocator {
    #[must_use]
    pub fn new(position: FixedPosition) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedGeolocator {
    fn current_position(
        &self,
        _options: PositionOptions,
    ) -> impl Future<Output = Result<Position, LocationError>> + Send {
        let fixed = self.position;
        async move {
            Ok(Position {
                latitude: fixed.latitude,
                longitude: fixed.longitude,
                accuracy: fixed.accuracy,
                timestamp: Utc::now(),
            })
        }
    }
}

/// A host without any geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGeolocator;

impl Geolocator for UnavailableGeolocator {
    fn current_position(
        &self,
        _options: PositionOptions,
    ) -> impl Future<Output = Result<Position, LocationError>> + Send {
        async { Err(LocationError::CapabilityUnavailable) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_geolocator_returns_configured_position() {
        let geo = FixedGeolocator::new(FixedPosition {
            latitude: 52.2297,
            longitude: 21.0122,
            accuracy: 25.0,
        });
        let pos = geo
            .current_position(PositionOptions::default())
            .await
            .unwrap();
        assert!((pos.latitude - 52.2297).abs() < f64::EPSILON);
        assert!((pos.longitude - 21.0122).abs() < f64::EPSILON);
        assert!((pos.accuracy - 25.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unavailable_geolocator_reports_missing_capability() {
        let err = UnavailableGeolocator
            .current_position(PositionOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, LocationError::CapabilityUnavailable);
    }
}
