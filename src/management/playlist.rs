use crate::{
    error::{AppError, AppResult},
    spotify::SpotifyClient,
    types::{CreatedPlaylist, UserProfile},
    utils,
};

/// Creates a playlist owned by the current user, fills it with `tracks` and
/// returns the playlist as the provider now reports it.
///
/// Each step needs the result of the one before. Nothing is rolled back: if
/// adding tracks fails, the freshly created playlist stays behind empty.
pub async fn create_playlist(
    client: &SpotifyClient,
    name: &str,
    tracks: &[String],
) -> AppResult<CreatedPlaylist> {
    let not_found = |e| AppError::upstream(e, AppError::NotFound);

    let me = client.get_me().await.map_err(not_found)?;
    let profile: UserProfile = serde_json::from_value(me)
        .map_err(|e| AppError::NotFound(format!("profile without id: {e}")))?;

    let created = client
        .create_playlist(&profile.id, name)
        .await
        .map_err(not_found)?;

    let uris: Vec<String> = tracks.iter().map(|t| utils::to_track_uri(t)).collect();
    client
        .add_tracks_to_playlist(&created.id, &uris)
        .await
        .map_err(|e| {
            tracing::warn!(playlist = %created.id, "Adding tracks failed, playlist left empty");
            not_found(e)
        })?;

    let retrieved_playlist = client.get_playlist(&created.id).await.map_err(not_found)?;

    Ok(CreatedPlaylist { retrieved_playlist })
}
