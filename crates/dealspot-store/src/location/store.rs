use tokio::sync::watch;

use super::{acquire, Geolocator, LocationState, Position, PositionOptions};

/// Holds the latest device position plus loading/error state.
///
/// Failures never clear an earlier reading: `location` keeps the last
/// successful position (or stays absent) and `error` describes what went wrong.
pub struct LocationStore<G> {
    geolocator: G,
    options: PositionOptions,
    state: LocationState,
    activated: bool,
    tx: watch::Sender<LocationState>,
}

impl<G: Geolocator> LocationStore<G> {
    /// Build an inactive store. Call [`Self::activate`] once the shell is up.
    pub fn new(geolocator: G, options: PositionOptions) -> Self {
        let (tx, _rx) = watch::channel(LocationState::default());
        Self {
            geolocator,
            options,
            state: LocationState::default(),
            activated: false,
            tx,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LocationState {
        &self.state
    }

    #[must_use]
    pub fn location(&self) -> Option<&Position> {
        self.state.location.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    #[must_use]
    pub fn options(&self) -> PositionOptions {
        self.options
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.tx.subscribe()
    }

    /// Mount-time acquisition. Only the first call does anything.
    pub async fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.get_current_location().await;
    }

    /// Acquire a fresh position, updating and publishing state around the call.
    ///
    /// Returns the new position, or `None` if acquisition failed (the reason is
    /// in [`Self::error`]).
    pub async fn get_current_location(&mut self) -> Option<Position> {
        self.state.loading = true;
        self.state.error = None;
        self.publish();

        let result = acquire(&self.geolocator, self.options).await;

        match &result {
            Ok(position) => {
                tracing::info!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    accuracy = position.accuracy,
                    "location acquired"
                );
                self.state.location = Some(*position);
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "location unavailable");
                self.state.error = Some(e.to_string());
            }
        }
        self.state.loading = false;
        self.publish();

        result.ok()
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.clone());
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
