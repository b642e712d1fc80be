use reqwest::{Response, StatusCode, header::RETRY_AFTER};
use thiserror::Error;

use crate::types::ProviderErrorBody;

/// Failure of a single call to the Spotify accounts service or Web API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpotifyError {
    #[error("request to Spotify failed: {0}")]
    Request(String),
    #[error("request to Spotify timed out")]
    Timeout,
    #[error("rate limited by Spotify")]
    RateLimited { retry_after: Option<u64> },
    #[error("Spotify responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from Spotify: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SpotifyError::Timeout
        } else if err.is_decode() {
            SpotifyError::Decode(err.to_string())
        } else {
            SpotifyError::Request(err.to_string())
        }
    }
}

/// Passes successful responses through and turns everything else into a
/// [`SpotifyError`], reading the provider's error message when it sent one.
pub(crate) async fn check(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        return Err(SpotifyError::RateLimited { retry_after });
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ProviderErrorBody>(&body) {
        Ok(parsed) => parsed.message(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("upstream error")
            .to_string(),
    };

    Err(SpotifyError::Status {
        status: status.as_u16(),
        message,
    })
}
