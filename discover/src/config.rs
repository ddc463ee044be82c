use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Port of the local commuter API when `COMMUTER_PORT` is unset
pub const DEFAULT_COMMUTER_PORT: u16 = 4000;

/// Port this server listens on when `PORT` is unset
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Port of the commuter API reachable on 127.0.0.1 during server-side render
    pub commuter_port: u16,
    /// Port the discover page server binds to
    pub listen_port: u16,
    /// Optional timeout for the discovery request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commuter_port: DEFAULT_COMMUTER_PORT,
            listen_port: DEFAULT_LISTEN_PORT,
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            commuter_port: parse_or(
                "COMMUTER_PORT",
                lookup("COMMUTER_PORT"),
                DEFAULT_COMMUTER_PORT,
            ),
            listen_port: parse_or("PORT", lookup("PORT"), DEFAULT_LISTEN_PORT),
            request_timeout: lookup("DISCOVERY_TIMEOUT_SECS")
                .and_then(|raw| parse_value::<u64>("DISCOVERY_TIMEOUT_SECS", &raw))
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    raw.and_then(|raw| parse_value(key, &raw)).unwrap_or(default)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            None
        }
    }
}
