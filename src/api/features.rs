use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::{AppError, AppResult},
    management,
    server::AppState,
    types::{FeaturesQuery, PlaylistFeatures},
    utils,
};

pub async fn features(
    State(state): State<AppState>,
    Query(params): Query<FeaturesQuery>,
) -> AppResult<Json<PlaylistFeatures>> {
    let playlist_ids = params
        .playlist_ids
        .as_deref()
        .map(utils::split_csv)
        .unwrap_or_default();
    if playlist_ids.is_empty() {
        return Err(AppError::Validation("playlistIds is required".into()));
    }

    let client = state.client_for(params.credentials.as_deref()).await?;
    let features = management::playlist_features(&client, &playlist_ids).await?;
    Ok(Json(features))
}
