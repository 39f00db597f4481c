use log::{info, warn};
use std::{env, fmt::Display, str::FromStr, time::Duration};

/// Simulated network delays and storage location.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// First listing load when the home page opens.
    pub initial_delay: Duration,
    /// Re-running the listing with new filter criteria.
    pub listing_delay: Duration,
    pub detail_delay: Duration,
    pub db_file: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            initial_delay: Duration::from_millis(try_load("STAYVN_INITIAL_DELAY_MS", 1500)),
            listing_delay: Duration::from_millis(try_load("STAYVN_LISTING_DELAY_MS", 800)),
            detail_delay: Duration::from_millis(try_load("STAYVN_DETAIL_DELAY_MS", 1000)),
            db_file: try_load("STAYVN_DB_FILE", "stayvn.db".to_string()),
        }
    }

    /// No simulated latency; used by tests.
    pub fn instant() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            listing_delay: Duration::ZERO,
            detail_delay: Duration::ZERO,
            db_file: "stayvn.db".to_string(),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(key, env::var(key).ok(), default)
}

/// Parses `raw`, falling back to `default` when it is unset or invalid.
pub(crate) fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
