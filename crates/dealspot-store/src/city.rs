//! City picker shown next to the search bar.
//!
//! "Near you" is always the first entry. Choosing it starts a fresh position
//! acquisition with the city-search options; failures quietly clear the
//! coordinates instead of surfacing an error.

use dealspot_core::{Language, TranslationKey};

use crate::error::StoreError;
use crate::location::{acquire, Coordinates, Geolocator, PositionOptions};

pub const CITIES: [&str; 10] = [
    "Warszawa",
    "Kraków",
    "Gdańsk",
    "Wrocław",
    "Poznań",
    "Łódź",
    "Szczecin",
    "Katowice",
    "Lublin",
    "Bydgoszcz",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySelection {
    NearYou,
    City(&'static str),
}

impl CitySelection {
    /// Parse user input: `near-you` (or either language's label for it), or a
    /// city name matched case-insensitively against [`CITIES`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`] for anything else.
    pub fn parse(input: &str) -> Result<Self, StoreError> {
        let wanted = input.trim().to_lowercase();
        let is_near_you_label = Language::ALL
            .into_iter()
            .any(|l| l.translations().get(TranslationKey::NearYou).to_lowercase() == wanted);
        if wanted == "near-you" || is_near_you_label {
            return Ok(CitySelection::NearYou);
        }
        CITIES
            .into_iter()
            .find(|c| c.to_lowercase() == wanted)
            .map(CitySelection::City)
            .ok_or_else(|| StoreError::InvalidArgument(format!("unknown city \"{input}\"")))
    }

    #[must_use]
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            CitySelection::NearYou => language.translations().get(TranslationKey::NearYou),
            CitySelection::City(name) => name,
        }
    }
}

pub struct CitySelector<G> {
    geolocator: G,
    options: PositionOptions,
    selection: CitySelection,
    coordinates: Option<Coordinates>,
}

impl<G: Geolocator> CitySelector<G> {
    /// Starts on "near you" with no coordinates. Call [`Self::activate`] to
    /// run the initial acquisition.
    pub fn new(geolocator: G, options: PositionOptions) -> Self {
        Self {
            geolocator,
            options,
            selection: CitySelection::NearYou,
            coordinates: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &CitySelection {
        &self.selection
    }

    /// Last coordinates acquired for "near you".
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Entries of the dropdown in display order.
    #[must_use]
    pub fn choices(language: Language) -> Vec<&'static str> {
        std::iter::once(CitySelection::NearYou.label(language))
            .chain(CITIES)
            .collect()
    }

    #[must_use]
    pub fn label(&self, language: Language) -> &'static str {
        self.selection.label(language)
    }

    /// Acquire coordinates if "near you" is selected and none are known yet.
    pub async fn activate(&mut self) {
        if self.selection == CitySelection::NearYou && self.coordinates.is_none() {
            self.locate().await;
        }
    }

    /// Change the selection. Picking "near you" always re-acquires; picking a
    /// city leaves any earlier coordinates untouched.
    pub async fn select(&mut self, selection: CitySelection) {
        tracing::debug!(?selection, "city selected");
        let near_you = selection == CitySelection::NearYou;
        self.selection = selection;
        if near_you {
            self.coordinates = None;
            self.locate().await;
        }
    }

    async fn locate(&mut self) {
        match acquire(&self.geolocator, self.options).await {
            Ok(position) => self.coordinates = Some(position.coordinates()),
            Err(e) => {
                tracing::debug!(error = %e, "near-you lookup failed");
                self.coordinates = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::error::LocationError;
    use crate::location::{Position, UnavailableGeolocator};

    /// Succeeds with a position whose latitude is the call number.
    #[derive(Clone, Default)]
    struct CountingGeolocator {
        calls: Arc<AtomicU32>,
    }

    impl Geolocator for CountingGeolocator {
        fn current_position(
            &self,
            _options: PositionOptions,
        ) -> impl Future<Output = Result<Position, LocationError>> + Send {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                Ok(Position {
                    latitude: f64::from(n),
                    longitude: 20.0,
                    accuracy: 5.0,
                    timestamp: Utc::now(),
                })
            }
        }
    }

    struct HangingGeolocator;

    impl Geolocator for HangingGeolocator {
        fn current_position(
            &self,
            _options: PositionOptions,
        ) -> impl Future<Output = Result<Position, LocationError>> + Send {
            std::future::pending()
        }
    }

    #[test]
    fn parse_accepts_near_you_spellings() {
        for input in ["near-you", "Near you", "blisko ciebie"] {
            assert_eq!(CitySelection::parse(input).unwrap(), CitySelection::NearYou);
        }
    }

    #[test]
    fn parse_matches_cities_case_insensitively() {
        assert_eq!(
            CitySelection::parse("KRAKÓW").unwrap(),
            CitySelection::City("Kraków")
        );
    }

    #[test]
    fn parse_rejects_unknown_city() {
        let err = CitySelection::parse("Berlin").unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(ref m) if m.contains("Berlin")));
    }

    #[test]
    fn choices_start_with_localized_near_you() {
        let pl = CitySelector::<UnavailableGeolocator>::choices(Language::Polish);
        let en = CitySelector::<UnavailableGeolocator>::choices(Language::English);
        assert_eq!(pl[0], "Blisko Ciebie");
        assert_eq!(en[0], "Near you");
        assert_eq!(pl.len(), CITIES.len() + 1);
        assert_eq!(&pl[1..], &CITIES[..]);
    }

    #[tokio::test]
    async fn activate_acquires_once_for_near_you() {
        let geo = CountingGeolocator::default();
        let mut selector = CitySelector::new(geo.clone(), PositionOptions::default());

        selector.activate().await;
        selector.activate().await;

        assert_eq!(geo.calls.load(Ordering::SeqCst), 1);
        assert!(selector.coordinates().is_some());
    }

    #[tokio::test]
    async fn selecting_city_keeps_coordinates_and_label() {
        let geo = CountingGeolocator::default();
        let mut selector = CitySelector::new(geo.clone(), PositionOptions::default());
        selector.activate().await;

        selector.select(CitySelection::City("Gdańsk")).await;

        assert_eq!(selector.label(Language::English), "Gdańsk");
        assert!(selector.coordinates().is_some());
        assert_eq!(geo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reselecting_near_you_reacquires() {
        let geo = CountingGeolocator::default();
        let mut selector = CitySelector::new(geo.clone(), PositionOptions::default());
        selector.activate().await;
        selector.select(CitySelection::City("Łódź")).await;

        selector.select(CitySelection::NearYou).await;

        assert_eq!(geo.calls.load(Ordering::SeqCst), 2);
        let coords = selector.coordinates().unwrap();
        assert!((coords.latitude - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn failure_clears_coordinates_silently() {
        let mut selector = CitySelector::new(UnavailableGeolocator, PositionOptions::default());
        selector.activate().await;
        assert!(selector.coordinates().is_none());
        assert_eq!(selector.label(Language::Polish), "Blisko Ciebie");
    }

    #[tokio::test(start_paused = true)]
    async fn uses_its_own_timeout() {
        let options = PositionOptions {
            timeout: Duration::from_secs(10),
            ..PositionOptions::default()
        };
        let mut selector = CitySelector::new(HangingGeolocator, options);

        let started = tokio::time::Instant::now();
        selector.activate().await;

        assert_eq!(started.elapsed(), Duration::from_secs(10));
        assert!(selector.coordinates().is_none());
    }
}
