//! # Spotify Integration Module
//!
//! Thin client for the two Spotify services the relay talks to. Nothing in
//! here knows about HTTP routes or sessions; it issues one upstream call per
//! method and reports failures as [`SpotifyError`].
//!
//! ## Architecture
//!
//! ```text
//! API Layer (axum handlers)
//!          ↓
//! Management Layer (session validity, aggregation)
//!          ↓
//! Spotify Integration Layer
//!     ├── Accounts service (authorize URL, code exchange, refresh)
//!     └── Web API (profile, playlists, tracks, audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! ### Accounts service
//! - `GET /authorize` - URL handed to the frontend, never called by the relay
//! - `POST /api/token` - Code exchange and token refresh
//!
//! ### Web API
//! - `GET /me` - Profile of the current user
//! - `GET /me/playlists` - Page of the current user's playlists
//! - `GET /playlists/{id}` - A single playlist
//! - `GET /playlists/{id}/tracks` - Track ids of a playlist
//! - `GET /audio-features` - Batched audio features
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `POST /playlists/{id}/tracks` - Add tracks to a playlist
//!
//! ## Timeouts
//!
//! Every request goes through the client built by [`http_client`], which
//! carries [`Config::upstream_timeout`]. A stalled upstream call fails with
//! [`SpotifyError::Timeout`] instead of holding the request open.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::SpotifyAuth;
pub use client::SpotifyClient;
pub use error::SpotifyError;

use reqwest::Client;

use crate::config::Config;

/// Builds the shared HTTP client used for every upstream call.
pub fn http_client(config: &Config) -> Result<Client, SpotifyError> {
    Client::builder()
        .timeout(config.upstream_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(SpotifyError::from)
}
