use crate::{
    error::{AppError, AppResult},
    spotify::SpotifyAuth,
    types::Session,
    utils,
};

/// Resolves a client-held [`Session`] to an access token that is valid now.
///
/// The relay keeps no state between requests, so a manager lives only as long
/// as the request that parsed it. A refreshed token is handed to the caller
/// and never stored.
#[derive(Debug, Clone)]
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(session: Session) -> Self {
        SessionManager { session }
    }

    /// Parses the `credentials` query value.
    ///
    /// # Errors
    ///
    /// Malformed JSON or a missing field is a [`AppError::Validation`].
    pub fn parse(raw: &str) -> AppResult<Self> {
        let session = serde_json::from_str::<Session>(raw)
            .map_err(|e| AppError::Validation(format!("invalid credentials: {e}")))?;
        Ok(Self::new(session))
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    /// `true` once `expiresAt` has been reached. No skew margin is applied.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.session.expires_at <= now_ms
    }

    pub async fn get_valid_token(&self, auth: &SpotifyAuth) -> AppResult<String> {
        self.valid_token_at(auth, utils::now_millis()).await
    }

    /// Returns the stored access token if it is still valid at `now_ms`,
    /// otherwise performs exactly one refresh.
    ///
    /// # Errors
    ///
    /// A failed refresh is not retried; it is reported as
    /// [`AppError::Unauthorized`] (or the rate-limit/timeout kinds) so the
    /// client restarts the OAuth flow.
    pub async fn valid_token_at(&self, auth: &SpotifyAuth, now_ms: i64) -> AppResult<String> {
        if !self.is_expired_at(now_ms) {
            return Ok(self.session.access_token.clone());
        }

        tracing::debug!(
            expired_for_ms = now_ms.saturating_sub(self.session.expires_at),
            "Access token expired, refreshing"
        );

        let token = auth
            .refresh_access_token(&self.session.refresh_token)
            .await
            .map_err(|e| AppError::upstream(e, AppError::Unauthorized))?;

        Ok(token.access_token)
    }
}
