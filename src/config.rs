use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://chronosketch.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);
pub const DEFAULT_SYNC_DEBOUNCE_MS: u64 = 2000;
pub const DEFAULT_STATUS_CLEAR_MS: u64 = 3000;

/// Where the to-do list is pushed, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncConfig {
    pub endpoint_url: Option<String>,
}

impl SyncConfig {
    pub fn new(endpoint_url: Option<String>) -> Self {
        Self {
            endpoint_url: normalize_url(endpoint_url),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint_url.is_some()
    }
}

/// Blank URLs mean sync is off.
pub fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub debounce: Duration,
    pub status_clear_after: Duration,
    /// Used when no endpoint has been saved yet.
    pub default_endpoint: Option<String>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_SYNC_DEBOUNCE_MS),
            status_clear_after: Duration::from_millis(DEFAULT_STATUS_CLEAR_MS),
            default_endpoint: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub sync: SyncSettings,
}

impl AppConfig {
    pub fn new_from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = parse_var("CHRONO_BIND_ADDR", SocketAddr::from(DEFAULT_BIND_ADDR));

        let sync = SyncSettings {
            debounce: Duration::from_millis(parse_var(
                "CHRONO_SYNC_DEBOUNCE_MS",
                DEFAULT_SYNC_DEBOUNCE_MS,
            )),
            status_clear_after: Duration::from_millis(parse_var(
                "CHRONO_STATUS_CLEAR_MS",
                DEFAULT_STATUS_CLEAR_MS,
            )),
            default_endpoint: normalize_url(env::var("CHRONO_SHEET_URL").ok()),
        };

        Self {
            database_url,
            bind_addr,
            sync,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}; using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_disables_sync() {
        assert!(!SyncConfig::new(None).is_enabled());
        assert!(!SyncConfig::new(Some("   ".to_string())).is_enabled());

        let config = SyncConfig::new(Some(" https://script.example/exec ".to_string()));
        assert_eq!(config.endpoint_url.as_deref(), Some("https://script.example/exec"));
    }

    #[test]
    fn default_bind_addr_is_local() {
        let addr = SocketAddr::from(DEFAULT_BIND_ADDR);
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn invalid_value_falls_back_to_default() {
        let default = SocketAddr::from(DEFAULT_BIND_ADDR);
        // SAFETY: no other test reads this variable.
        unsafe { env::set_var("CHRONO_TEST_BIND_ADDR", "not an address") };
        assert_eq!(parse_var("CHRONO_TEST_BIND_ADDR", default), default);

        unsafe { env::set_var("CHRONO_TEST_BIND_ADDR", " 0.0.0.0:8080 ") };
        assert_eq!(parse_var("CHRONO_TEST_BIND_ADDR", default).port(), 8080);
        unsafe { env::remove_var("CHRONO_TEST_BIND_ADDR") };
    }
}
