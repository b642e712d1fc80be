//! # CLI Module
//!
//! Command implementations behind the `tuneproxy` binary.
//!
//! - [`serve`] - Runs the HTTP relay until it is stopped
//! - [`auth_url`] - Prints (and optionally opens) the Spotify authorization URL
//!
//! Both commands read their settings through [`crate::config::Config`]; flags
//! given on the command line win over the environment. Fatal problems are
//! reported with the crate's `error!` macro, which exits the process.
//!
//! ```bash
//! tuneproxy serve --port 9000
//! tuneproxy auth-url --open
//! ```

mod auth;
mod serve;

pub use auth::auth_url;
pub use serve::serve;
