//! Spotify Web API relay
//!
//! A small stateless backend that relays the Spotify Web API to a frontend
//! client. It forwards the OAuth code exchange, resolves client-held sessions
//! to valid access tokens, and combines several upstream calls into single
//! responses (profile with playlists, audio features across playlists,
//! playlist creation).
//!
//! # Modules
//!
//! - `api` - HTTP handlers
//! - `cli` - Command implementations for the binary
//! - `config` - Configuration loaded from the environment
//! - `error` - Error kinds and their HTTP mapping
//! - `management` - Session validity and multi-call orchestration
//! - `server` - Router construction and serving
//! - `spotify` - Spotify accounts service and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tuneproxy::{config::{self, Config}, server};
//!
//! #[tokio::main]
//! async fn main() -> tuneproxy::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(Config::from_env()?).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the top of the binary and for server start-up, where any error is
/// fatal and only needs to be reported. Request handling uses the typed
/// [`error::AppResult`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line with a blue `o` marker.
///
/// Console output for the binary's commands; the running server logs through
/// `tracing` instead.
///
/// ```
/// info!("Starting relay on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning line with a yellow `!` marker to stderr.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red `!` marker to stderr and exits with code 1.
///
/// Only for start-up failures the process cannot recover from. The macro
/// evaluates to `!`, so it can stand in a `match` arm:
///
/// ```
/// let config = match Config::from_env() {
///     Ok(config) => config,
///     Err(e) => error!("Invalid configuration: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
