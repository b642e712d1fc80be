use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

use crate::types::PlaylistTracksPage;

/// Number of playlists returned per `/user` page.
pub const PLAYLIST_PAGE_SIZE: u32 = 20;

/// Upper bound on ids sent in one audio-feature lookup.
pub const MAX_FEATURE_TRACKS: usize = 99;

const TRACK_URI_PREFIX: &str = "spotify:track:";

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Splits a comma-separated query value, trimming entries and dropping empty
/// ones.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn page_offset(page: u32) -> u32 {
    page.saturating_mul(PLAYLIST_PAGE_SIZE)
}

/// Accepts either a bare track id or a full `spotify:` URI.
pub fn to_track_uri(track: &str) -> String {
    if track.starts_with("spotify:") {
        track.to_string()
    } else {
        format!("{TRACK_URI_PREFIX}{track}")
    }
}

/// Track ids of one page, skipping items that have none.
pub fn track_ids(page: &PlaylistTracksPage) -> impl Iterator<Item = &str> {
    page.items
        .iter()
        .filter_map(|item| item.track.as_ref().and_then(|track| track.id.as_deref()))
}

/// Flattens the track ids of several playlist pages into one sequence.
///
/// Order is playlist first, then position within the playlist. Items without
/// a track id (local files, removed tracks) are skipped. The result holds at
/// most `limit` ids; the flag reports whether anything was cut off.
pub fn flatten_track_ids(pages: &[PlaylistTracksPage], limit: usize) -> (Vec<String>, bool) {
    let mut ids = pages.iter().flat_map(track_ids);

    let kept: Vec<String> = ids.by_ref().take(limit).map(str::to_string).collect();
    let truncated = ids.next().is_some();
    (kept, truncated)
}
