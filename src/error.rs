use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::spotify::SpotifyError;

/// Error returned by every request handler.
///
/// Each variant maps to exactly one HTTP status. Handlers pick the kind a
/// provider failure turns into with [`AppError::upstream`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing or malformed request parameters.
    #[error("{0}")]
    Validation(String),

    /// Code exchange or token refresh rejected; the client must restart OAuth.
    #[error("{0}")]
    Unauthorized(String),

    /// Generic upstream failure.
    #[error("{0}")]
    NotFound(String),

    /// The batched audio-feature lookup failed.
    #[error("{0}")]
    FeatureLookup(String),

    #[error("rate limited by Spotify")]
    RateLimited { retry_after: Option<u64> },

    #[error("request to Spotify timed out")]
    UpstreamTimeout,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Maps a provider failure onto the kind the calling route reports.
    ///
    /// Rate limiting and timeouts keep their own kind on every route; any other
    /// failure becomes `fallback`.
    pub fn upstream(err: SpotifyError, fallback: fn(String) -> AppError) -> AppError {
        match err {
            SpotifyError::RateLimited { retry_after } => AppError::RateLimited { retry_after },
            SpotifyError::Timeout => AppError::UpstreamTimeout,
            other => fallback(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::FeatureLookup(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::FeatureLookup(_) => "FEATURE_LOOKUP_FAILED",
            AppError::RateLimited { .. } => "RATE_LIMITED",
            AppError::UpstreamTimeout => "UPSTREAM_TIMEOUT",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        } else {
            tracing::warn!(error = %self, code = self.code(), "Request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));

        let mut response = (status, body).into_response();
        if let AppError::RateLimited {
            retry_after: Some(secs),
        } = self
        {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}
