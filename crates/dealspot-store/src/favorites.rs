//! The user's saved promotions, persisted on every change.

use dealspot_core::Promotion;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{StorageError, StoreError};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized favorites collection.
pub const FAVORITES_KEY: &str = "favorites";

/// Version written into every persisted payload.
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct PersistedFavoritesRef<'a> {
    version: u32,
    favorites: &'a [Promotion],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedFavorites {
    Versioned {
        version: u32,
        favorites: Vec<Promotion>,
    },
    /// Bare array written before payloads were versioned.
    Legacy(Vec<Promotion>),
}

/// Ordered, duplicate-free set of favorited promotions keyed by `id`.
///
/// The in-memory collection is authoritative: a mutation updates it, writes the
/// whole collection to storage, then publishes it to subscribers before
/// returning. A failed write is logged and kept in [`Self::persist_error`]; the
/// mutation itself still stands.
pub struct FavoritesStore<S> {
    storage: S,
    favorites: Vec<Promotion>,
    persist_error: Option<String>,
    tx: watch::Sender<Vec<Promotion>>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Load the last persisted collection from `storage`.
    ///
    /// Missing, unreadable, or corrupt payloads yield an empty store.
    pub fn load(storage: S) -> Self {
        let favorites = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match decode_favorites(&raw) {
                Ok(favorites) => favorites,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding persisted favorites");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted favorites; starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = favorites.len(), "favorites loaded");
        let (tx, _rx) = watch::channel(favorites.clone());
        Self {
            storage,
            favorites,
            persist_error: None,
            tx,
        }
    }

    #[must_use]
    pub fn favorites(&self) -> &[Promotion] {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|p| p.id == id)
    }

    /// Add `promotion` unless one with the same id is already saved.
    ///
    /// Returns `true` if the collection changed.
    pub fn add_favorite(&mut self, promotion: Promotion) -> bool {
        if self.is_favorite(&promotion.id) {
            tracing::debug!(id = %promotion.id, "already a favorite");
            return false;
        }
        tracing::info!(id = %promotion.id, "favorite added");
        self.favorites.push(promotion);
        self.commit();
        true
    }

    /// Remove the promotion with `id`, if saved.
    ///
    /// Returns `true` if the collection changed.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|p| p.id != id);
        if self.favorites.len() == before {
            tracing::debug!(id, "not a favorite; nothing to remove");
            return false;
        }
        tracing::info!(id, "favorite removed");
        self.commit();
        true
    }

    /// Heart-button semantics: remove if saved, add otherwise.
    ///
    /// Returns whether the promotion is a favorite afterwards.
    pub fn toggle_favorite(&mut self, promotion: Promotion) -> bool {
        if self.is_favorite(&promotion.id) {
            self.remove_favorite(&promotion.id);
            false
        } else {
            self.add_favorite(promotion);
            true
        }
    }

    /// Receiver that observes every committed collection.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Promotion>> {
        self.tx.subscribe()
    }

    /// Description of the last failed write, cleared by the next successful one.
    #[must_use]
    pub fn persist_error(&self) -> Option<&str> {
        self.persist_error.as_deref()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self) {
        match self.persist() {
            Ok(()) => self.persist_error = None,
            Err(e) => {
                tracing::error!(error = %e, "failed to persist favorites");
                self.persist_error = Some(e.to_string());
            }
        }
        self.tx.send_replace(self.favorites.clone());
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let payload = encode_favorites(&self.favorites)?;
        self.storage.set(FAVORITES_KEY, &payload)
    }
}

fn encode_favorites(favorites: &[Promotion]) -> Result<String, StorageError> {
    serde_json::to_string(&PersistedFavoritesRef {
        version: FORMAT_VERSION,
        favorites,
    })
    .map_err(|source| StorageError::Encode {
        key: FAVORITES_KEY.to_string(),
        source,
    })
}

/// Decode a persisted payload, dropping later duplicates of an id.
fn decode_favorites(raw: &str) -> Result<Vec<Promotion>, StoreError> {
    let corrupt = |reason: String| StoreError::PersistenceCorrupt {
        key: FAVORITES_KEY.to_string(),
        reason,
    };

    let parsed: PersistedFavorites =
        serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;

    let favorites = match parsed {
        PersistedFavorites::Versioned { version, favorites } => {
            if version != FORMAT_VERSION {
                return Err(corrupt(format!("unsupported format version {version}")));
            }
            favorites
        }
        PersistedFavorites::Legacy(favorites) => {
            tracing::debug!("migrating unversioned favorites payload");
            favorites
        }
    };

    let mut seen = std::collections::HashSet::new();
    let total = favorites.len();
    let deduped: Vec<Promotion> = favorites
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();
    if deduped.len() != total {
        tracing::warn!(
            dropped = total - deduped.len(),
            "persisted favorites contained duplicate ids"
        );
    }
    Ok(deduped)
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
