use crate::app_config::{AppConfig, Environment, FixedPosition};
use crate::ConfigError;

/// Default accuracy (meters) for a fixed position given without one.
const DEFAULT_FIXED_ACCURACY_M: f64 = 50.0;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true/false, got \"{raw}\""),
        })
    };

    let env = parse_environment(&or_default("DEALSPOT_ENV", "development"))?;
    let log_level = or_default("DEALSPOT_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("DEALSPOT_DATA_DIR", "./data"));
    let catalog_path = lookup("DEALSPOT_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let geo_timeout_ms = parse_u64("DEALSPOT_GEO_TIMEOUT_MS", "5000")?;
    let city_geo_timeout_ms = parse_u64("DEALSPOT_CITY_GEO_TIMEOUT_MS", "10000")?;
    let geo_high_accuracy = parse_bool("DEALSPOT_GEO_HIGH_ACCURACY", "true")?;
    let geo_max_age_ms = parse_u64("DEALSPOT_GEO_MAX_AGE_MS", "0")?;

    let geo_fixed_position = match lookup("DEALSPOT_GEO_FIXED_POSITION") {
        Ok(raw) if !raw.trim().is_empty() => Some(parse_fixed_position(&raw).map_err(
            |reason| ConfigError::InvalidEnvVar {
                var: "DEALSPOT_GEO_FIXED_POSITION".to_string(),
                reason,
            },
        )?),
        _ => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        catalog_path,
        geo_timeout_ms,
        city_geo_timeout_ms,
        geo_high_accuracy,
        geo_max_age_ms,
        geo_fixed_position,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEALSPOT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Parse `lat,lon` or `lat,lon,accuracy`.
fn parse_fixed_position(raw: &str) -> Result<FixedPosition, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(format!(
            "expected \"lat,lon\" or \"lat,lon,accuracy\", got \"{raw}\""
        ));
    }

    let number = |s: &str, what: &str| -> Result<f64, String> {
        s.parse::<f64>()
            .map_err(|e| format!("invalid {what} \"{s}\": {e}"))
    };

    let latitude = number(parts[0], "latitude")?;
    let longitude = number(parts[1], "longitude")?;
    let accuracy = match parts.get(2) {
        Some(s) => number(s, "accuracy")?,
        None => DEFAULT_FIXED_ACCURACY_M,
    };

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("latitude {latitude} out of range [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("longitude {longitude} out of range [-180, 180]"));
    }
    if accuracy.is_nan() || accuracy < 0.0 {
        return Err(format!("accuracy {accuracy} must be non-negative"));
    }

    Ok(FixedPosition {
        latitude,
        longitude,
        accuracy,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
