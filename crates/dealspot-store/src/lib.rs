//! Client-side state stores: favorites, UI language, and device location.
//!
//! Each store is an explicit object built once by the shell and handed to its
//! consumers. Mutators take `&mut self`; consumers that only need to react to
//! changes hold a `tokio::sync::watch::Receiver` from `subscribe()`.

pub mod city;
pub mod error;
pub mod favorites;
pub mod localization;
pub mod location;
pub mod storage;

pub use city::{CitySelection, CitySelector, CITIES};
pub use error::{LocationError, StorageError, StoreError};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use localization::LocalizationStore;
pub use location::{
    Coordinates, FixedGeolocator, Geolocator, LocationState, LocationStore, Position,
    PositionOptions, UnavailableGeolocator,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
