//! # API Module
//!
//! HTTP handlers for the relay. Each handler validates its query parameters,
//! resolves the caller's session to a request-scoped Spotify client and
//! delegates to [`crate::management`]. Every failure is an
//! [`AppError`](crate::error::AppError) and is rendered as a JSON error body.
//!
//! ## Endpoints
//!
//! - [`root`] - `GET /`, liveness text
//! - [`health`] - `GET /health`, status and version
//! - [`get_auth_url`] - `GET /get-auth-url`, authorization URL
//! - [`authorize`] - `GET /authorize?code=`, code exchange
//! - [`user`] - `GET /user?credentials=&page=`, profile and playlists
//! - [`features`] - `GET /features?credentials=&playlistIds=`, audio features
//! - [`create_playlist`] - `GET /createPlaylist?credentials=&playlistName=&tracks=`
//!
//! `credentials` is always the client's session as JSON text:
//! `{"accessToken": "...", "refreshToken": "...", "expiresAt": 1700000000000}`.

mod auth;
mod features;
mod health;
mod playlist;
mod user;

pub use auth::{authorize, get_auth_url};
pub use features::features;
pub use health::{health, root};
pub use playlist::create_playlist;
pub use user::user;
