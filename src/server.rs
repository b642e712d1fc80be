use std::sync::Arc;

use axum::{Router, routing::get};
use reqwest::Client;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    Res, api,
    config::Config,
    error::{AppError, AppResult},
    management::SessionManager,
    spotify::{self, SpotifyAuth, SpotifyClient},
};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Res<Self> {
        let http = spotify::http_client(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            http,
        })
    }

    pub fn auth(&self) -> SpotifyAuth {
        SpotifyAuth::new(self.http.clone(), Arc::clone(&self.config))
    }

    pub fn client(&self, access_token: impl Into<String>) -> SpotifyClient {
        SpotifyClient::new(self.http.clone(), Arc::clone(&self.config), access_token)
    }

    /// Turns the `credentials` query value into a client holding a token that
    /// is valid now, refreshing it first if needed.
    pub async fn client_for(&self, credentials: Option<&str>) -> AppResult<SpotifyClient> {
        let raw = credentials
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::Validation("credentials is required".into()))?;

        let token = SessionManager::parse(raw)?
            .get_valid_token(&self.auth())
            .await?;

        Ok(self.client(token))
    }
}

/// Builds the application router.
///
/// CORS is wide open (any origin, method and header): the relay is meant to sit
/// behind a trusted frontend.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/get-auth-url", get(api::get_auth_url))
        .route("/authorize", get(api::authorize))
        .route("/user", get(api::user))
        .route("/features", get(api::features))
        .route("/createPlaylist", get(api::create_playlist))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = config.server_addr();
    let state = AppState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
