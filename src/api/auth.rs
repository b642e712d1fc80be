use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::{AppError, AppResult},
    server::AppState,
    types::{AuthorizeQuery, TokenBundle},
    utils,
};

/// Hands the frontend the URL that starts the OAuth flow.
pub async fn get_auth_url(State(state): State<AppState>) -> AppResult<String> {
    state
        .auth()
        .authorize_url(&utils::generate_state())
        .map_err(|e| AppError::upstream(e, AppError::NotFound))
}

/// Exchanges the authorization code from the redirect for a token bundle.
///
/// Nothing is stored server side; the frontend keeps the bundle as its session.
pub async fn authorize(
    State(state): State<AppState>,
    Query(params): Query<AuthorizeQuery>,
) -> AppResult<Json<TokenBundle>> {
    let code = params
        .code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("code is required".into()))?;

    let token = state
        .auth()
        .exchange_code(&code)
        .await
        .map_err(|e| AppError::upstream(e, AppError::Unauthorized))?;

    tracing::info!(scope = %token.scope, "Authorization code exchanged");
    Ok(Json(token))
}
