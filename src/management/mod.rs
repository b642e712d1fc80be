//! Orchestration of provider calls behind each endpoint.
//!
//! Every function here takes a request-scoped [`SpotifyClient`](crate::spotify::SpotifyClient),
//! runs its upstream calls in data-dependency order and reshapes the results
//! into one response envelope. No state outlives the request.

mod features;
mod playlist;
mod session;
mod user;

pub use features::playlist_features;
pub use playlist::create_playlist;
pub use session::SessionManager;
pub use user::user_overview;
