use std::sync::Arc;

use crate::{config::Config, error, spotify, success, utils, warning};

/// Prints the authorization URL, optionally opening it in the browser.
///
/// Handy for walking through the OAuth flow by hand: the redirect lands on the
/// frontend (or `/authorize`) with the code to exchange.
pub async fn auth_url(open: bool) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let http = match spotify::http_client(&config) {
        Ok(http) => http,
        Err(e) => error!("Cannot build HTTP client: {}", e),
    };

    let auth = spotify::SpotifyAuth::new(http, Arc::new(config));
    let url = match auth.authorize_url(&utils::generate_state()) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization URL: {}", e),
    };

    println!("{url}");

    if open {
        if webbrowser::open(&url).is_err() {
            warning!("Failed to open browser. Please navigate to the URL above manually.");
        } else {
            success!("Opened authorization URL in the browser");
        }
    }
}
