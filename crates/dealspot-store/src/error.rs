use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key \"{0}\"")]
    InvalidKey(String),

    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures recovered inside a store and reported as state or a rejected call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("persisted {key} payload is corrupt: {reason}")]
    PersistenceCorrupt { key: String, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Why a position could not be acquired. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("geolocation is not supported on this device")]
    CapabilityUnavailable,

    #[error("permission to access location was denied")]
    PermissionDenied,

    #[error("location request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}
