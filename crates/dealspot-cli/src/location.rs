//! Device position and city selection commands.

use std::future::Future;

use dealspot_core::{AppConfig, Language, TranslationKey};
use dealspot_store::{
    CitySelection, CitySelector, FixedGeolocator, Geolocator, LocationError, LocationStore,
    Position, PositionOptions, UnavailableGeolocator,
};

/// The geolocation capability available to a terminal session: a configured
/// fixed position, or none at all.
#[derive(Debug, Clone, Copy)]
pub(crate) enum HostGeolocator {
    Fixed(FixedGeolocator),
    Unavailable(UnavailableGeolocator),
}

impl HostGeolocator {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        match config.geo_fixed_position {
            Some(position) => HostGeolocator::Fixed(FixedGeolocator::new(position)),
            None => HostGeolocator::Unavailable(UnavailableGeolocator),
        }
    }
}

impl Geolocator for HostGeolocator {
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Position, LocationError>> + Send {
        let host = *self;
        async move {
            match host {
                HostGeolocator::Fixed(g) => g.current_position(options).await,
                HostGeolocator::Unavailable(g) => g.current_position(options).await,
            }
        }
    }
}

pub(crate) async fn run_locate(config: &AppConfig, language: Language) {
    let t = language.translations();
    let mut store = LocationStore::new(
        HostGeolocator::from_config(config),
        PositionOptions::primary(config),
    );
    store.activate().await;

    println!("{}: {}", t.get(TranslationKey::CurrentLocation), store.state().label(&t));
    if let Some(position) = store.location() {
        println!("accuracy: {:.0} m", position.accuracy);
    }
    if let Some(error) = store.error() {
        eprintln!("{error}");
    }
}

/// # Errors
///
/// Returns an error if `name` is neither a known city nor `near-you`.
pub(crate) async fn run_city(
    config: &AppConfig,
    name: &str,
    language: Language,
) -> anyhow::Result<()> {
    let selection = CitySelection::parse(name)?;
    let mut selector = CitySelector::new(
        HostGeolocator::from_config(config),
        PositionOptions::city_search(config),
    );
    selector.select(selection).await;

    let t = language.translations();
    println!("{}: {}", t.get(TranslationKey::SelectCity), selector.label(language));
    if let Some(coordinates) = selector.coordinates() {
        println!("{coordinates}");
    }
    Ok(())
}
