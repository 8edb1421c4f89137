// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::{NonZeroU64, NonZeroUsize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TABLE: &str = "car_listings";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Endpoint and key for the REST listing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub endpoint: String,
    pub access_key: String,
}

/// Whether a live store can be queried at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAccess {
    Configured(StoreCredentials),
    Unconfigured,
}

impl StoreAccess {
    /// Both values present and non-blank, otherwise `Unconfigured`.
    pub fn detect(endpoint: Option<String>, access_key: Option<String>) -> Self {
        let present = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        match (present(endpoint), present(access_key)) {
            (Some(endpoint), Some(access_key)) => StoreAccess::Configured(StoreCredentials {
                endpoint,
                access_key,
            }),
            _ => StoreAccess::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, StoreAccess::Configured(_))
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub access: StoreAccess,
    pub table: String,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            access: StoreAccess::Unconfigured,
            table: DEFAULT_TABLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any key lookup. A missing store endpoint or key is not an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let either = |name: &str, alias: &str| lookup(name).or_else(|| lookup(alias));

        let access = StoreAccess::detect(
            either("SUPABASE_URL", "VITE_SUPABASE_URL"),
            either("SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"),
        );

        let table = setting::<String, _>("LISTINGS_TABLE", "table name", &lookup)?
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        // Zero would mean "time out at once" / "no workers"
        let timeout_secs = setting::<NonZeroU64, _>("STORE_TIMEOUT_SECS", "positive number of seconds", &lookup)?
            .map_or(DEFAULT_TIMEOUT_SECS, NonZeroU64::get);
        let max_workers = setting::<NonZeroUsize, _>("MAX_WORKERS", "positive worker count", &lookup)?
            .map_or(DEFAULT_MAX_WORKERS, NonZeroUsize::get);

        let bind_addr = setting::<SocketAddr, _>("BIND_ADDR", "socket address", &lookup)?
            .unwrap_or(DEFAULT_BIND_ADDR);

        Ok(Self {
            bind_addr,
            max_workers,
            store: StoreConfig {
                access,
                table,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

/// A missing or blank setting is `None`; anything else must parse.
fn setting<T, F>(
    name: &'static str,
    expected: &'static str,
    lookup: &F,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value: raw,
        })
}
