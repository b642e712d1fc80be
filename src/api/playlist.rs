use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::{AppError, AppResult},
    management,
    server::AppState,
    types::{CreatePlaylistQuery, CreatedPlaylist},
    utils,
};

pub async fn create_playlist(
    State(state): State<AppState>,
    Query(params): Query<CreatePlaylistQuery>,
) -> AppResult<Json<CreatedPlaylist>> {
    let name = params
        .playlist_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("playlistName is required".into()))?
        .to_string();

    let tracks = params
        .tracks
        .as_deref()
        .map(utils::split_csv)
        .unwrap_or_default();
    if tracks.is_empty() {
        return Err(AppError::Validation("tracks is required".into()));
    }

    let client = state.client_for(params.credentials.as_deref()).await?;
    let created = management::create_playlist(&client, &name, &tracks).await?;

    tracing::info!(tracks = tracks.len(), "Playlist created");
    Ok(Json(created))
}
