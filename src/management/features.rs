use futures::future::try_join_all;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    spotify::{SpotifyClient, SpotifyError},
    types::{PlaylistFeatures, PlaylistTracksPage},
    utils::{self, MAX_FEATURE_TRACKS},
};

/// Page size for playlist track requests, the provider's maximum.
const TRACKS_PAGE_SIZE: u32 = 100;

/// Audio features for the tracks of several playlists in one batch.
///
/// Playlists are fetched concurrently and joined; one failed fetch fails the
/// whole call. Ids are flattened in playlist-then-position order and cut to
/// [`MAX_FEATURE_TRACKS`] before the single feature lookup.
pub async fn playlist_features(
    client: &SpotifyClient,
    playlist_ids: &[String],
) -> AppResult<PlaylistFeatures> {
    let pages: Vec<PlaylistTracksPage> = try_join_all(
        playlist_ids.iter().map(|id| playlist_track_pages(client, id)),
    )
    .await
    .map_err(|e| AppError::upstream(e, AppError::NotFound))?
    .into_iter()
    .flatten()
    .collect();

    let (track_ids, truncated) = utils::flatten_track_ids(&pages, MAX_FEATURE_TRACKS);
    if truncated {
        tracing::info!(
            playlists = playlist_ids.len(),
            kept = track_ids.len(),
            "Feature batch truncated"
        );
    }

    if track_ids.is_empty() {
        return Ok(PlaylistFeatures {
            track_features: json!({ "audio_features": [] }),
            truncated,
        });
    }

    let track_features = client
        .get_audio_features_for_tracks(&track_ids)
        .await
        .map_err(|e| AppError::upstream(e, AppError::FeatureLookup))?;

    Ok(PlaylistFeatures {
        track_features,
        truncated,
    })
}

/// Pages of one playlist, in order.
///
/// Pages are requested one after the other until the playlist runs out or
/// more than [`MAX_FEATURE_TRACKS`] ids have been seen, enough to fill the
/// batch and tell whether it was cut. Items without a track id do not count.
async fn playlist_track_pages(
    client: &SpotifyClient,
    playlist_id: &str,
) -> Result<Vec<PlaylistTracksPage>, SpotifyError> {
    let mut pages = Vec::new();
    let mut offset = 0u32;
    let mut seen = 0usize;

    loop {
        let page = client
            .get_playlist_tracks(playlist_id, offset, TRACKS_PAGE_SIZE)
            .await?;

        let fetched = page.items.len() as u32;
        seen += utils::track_ids(&page).count();
        let has_more = page.next.is_some() && fetched > 0;
        pages.push(page);

        if !has_more || seen > MAX_FEATURE_TRACKS {
            break;
        }
        offset = offset.saturating_add(fetched);
    }

    tracing::debug!(playlist_id, pages = pages.len(), seen, "Fetched playlist tracks");
    Ok(pages)
}
