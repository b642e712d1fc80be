use std::sync::Arc;

use reqwest::{Client, Url};

use crate::{
    config::Config,
    spotify::error::{SpotifyError, check},
    types::TokenBundle,
    utils,
};

/// Client for the Spotify accounts service.
///
/// Uses the confidential-client authorization code flow: the client secret
/// stays on the server and is sent as HTTP basic credentials on every token
/// request.
#[derive(Debug, Clone)]
pub struct SpotifyAuth {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyAuth {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        SpotifyAuth { http, config }
    }

    /// Builds the URL the frontend sends the user to for granting access.
    ///
    /// The scopes are taken from [`Config::scopes`] and joined with spaces as
    /// the accounts service expects. `state` is echoed back to the redirect URI
    /// untouched.
    pub fn authorize_url(&self, state: &str) -> Result<String, SpotifyError> {
        let scope = self.config.scopes.join(" ");
        let url = Url::parse_with_params(
            &format!("{}/authorize", self.config.accounts_url),
            &[
                ("client_id", self.config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| SpotifyError::Request(e.to_string()))?;

        Ok(url.to_string())
    }

    /// Exchanges an authorization code received on the redirect URI for an
    /// access and refresh token.
    ///
    /// # Errors
    ///
    /// An unknown, expired or already used code is answered by the accounts
    /// service with `400 invalid_grant`, surfaced as [`SpotifyError::Status`].
    pub async fn exchange_code(&self, code: &str) -> Result<TokenBundle, SpotifyError> {
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])
        .await
    }

    /// Trades a refresh token for a new access token.
    ///
    /// The accounts service may omit the refresh token from the response, in
    /// which case the one passed in stays valid and is carried over.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenBundle, SpotifyError> {
        let mut token = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;

        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token.to_string());
        }
        Ok(token)
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenBundle, SpotifyError> {
        let response = self
            .http
            .post(format!("{}/api/token", self.config.accounts_url))
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(form)
            .send()
            .await?;

        let mut token = check(response).await?.json::<TokenBundle>().await?;
        token.expires_at =
            utils::now_millis().saturating_add(token.expires_in.saturating_mul(1000));
        Ok(token)
    }
}
