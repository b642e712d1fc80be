//! Configuration management for the relay server.
//!
//! Configuration is read once at start-up into an immutable [`Config`] that is
//! shared (behind an `Arc`) with every request-scoped Spotify client. Values come
//! from environment variables, optionally seeded from `.env` files:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_SCOPES: [&str; 8] = [
    "user-read-private",
    "user-read-email",
    "playlist-read-private",
    "playlist-modify-public",
    "playlist-modify-private",
    "user-read-playback-state",
    "user-read-currently-playing",
    "user-modify-playback-state",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Process-wide settings, read-only after start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub accounts_url: String,
    pub scopes: Vec<String>,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `CLIENT_ID`, `CLIENT_SECRET` and `REDIRECT_URI` are required. Everything
    /// else falls back to a default. The two Spotify URLs must be absolute
    /// `http(s)` URLs:
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `HOST`                  | `0.0.0.0`                        |
    /// | `PORT`                  | `8888`                           |
    /// | `SPOTIFY_API_URL`       | `https://api.spotify.com/v1`     |
    /// | `SPOTIFY_ACCOUNTS_URL`  | `https://accounts.spotify.com`   |
    /// | `SPOTIFY_SCOPES`        | see [`DEFAULT_SCOPES`]           |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "UPSTREAM_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let base_url = |var: &'static str, default: &str| {
            let value = lookup(var).unwrap_or_else(|| default.to_string());
            match Url::parse(&value) {
                Ok(url) if !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https") => {
                    Ok(trim_url(value))
                }
                _ => Err(ConfigError::Invalid { var, value }),
            }
        };

        let scopes = match lookup("SPOTIFY_SCOPES") {
            Some(value) => parse_scopes(&value),
            None => DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            redirect_uri: required("REDIRECT_URI")?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_url: base_url("SPOTIFY_API_URL", DEFAULT_API_URL)?,
            accounts_url: base_url("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL)?,
            scopes,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// The `host:port` string the server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_scopes(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Loads environment variables from `.env` files.
///
/// Reads `.env` from the working directory first, then the one in the local
/// data directory under `tuneproxy/.env`. Values already present in the
/// environment are never overwritten, and a missing file is not an error.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the per-user `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tuneproxy/.env");
    path
}
