use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// A fixed position served to the stores instead of a device reading,
/// parsed from `DEALSPOT_GEO_FIXED_POSITION` (`lat,lon[,accuracy]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory backing the durable key-value storage (favorites live here).
    pub data_dir: PathBuf,
    /// Optional YAML catalog; the built-in mock catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Timeout for the primary "current location" acquisition.
    pub geo_timeout_ms: u64,
    /// Timeout for the acquisition triggered from city selection.
    ///
    /// Kept separate from `geo_timeout_ms`; the two flows were tuned independently.
    pub city_geo_timeout_ms: u64,
    pub geo_high_accuracy: bool,
    pub geo_max_age_ms: u64,
    pub geo_fixed_position: Option<FixedPosition>,
}
