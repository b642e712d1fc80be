use tuneproxy::types::{PlaylistItem, PlaylistTracksPage, TrackRef};
use tuneproxy::utils::*;

// Helper function to create a page of tracks with ids `{prefix}-{n}`
fn create_test_page(prefix: &str, count: usize) -> PlaylistTracksPage {
    PlaylistTracksPage {
        items: (0..count)
            .map(|i| PlaylistItem {
                track: Some(TrackRef {
                    id: Some(format!("{prefix}-{i}")),
                }),
            })
            .collect(),
        next: None,
    }
}

#[test]
fn test_split_csv() {
    assert_eq!(split_csv("a,b,c"), vec!["a", "b", "c"]);
    assert_eq!(split_csv(" a , b "), vec!["a", "b"]);
    assert_eq!(split_csv("a,,b,"), vec!["a", "b"]);
    assert!(split_csv("").is_empty());
    assert!(split_csv(" , ").is_empty());
}

#[test]
fn test_page_offset() {
    assert_eq!(page_offset(0), 0);
    assert_eq!(page_offset(1), 20);
    assert_eq!(page_offset(3), 60);
    // Saturates instead of overflowing
    assert_eq!(page_offset(u32::MAX), u32::MAX);
}

#[test]
fn test_to_track_uri() {
    assert_eq!(to_track_uri("id1"), "spotify:track:id1");
    assert_eq!(to_track_uri("spotify:track:id1"), "spotify:track:id1");
    assert_eq!(to_track_uri("spotify:episode:abc"), "spotify:episode:abc");
}

#[test]
fn test_flatten_keeps_playlist_then_position_order() {
    let pages = vec![create_test_page("p1", 2), create_test_page("p2", 2)];

    let (ids, truncated) = flatten_track_ids(&pages, MAX_FEATURE_TRACKS);

    assert_eq!(ids, vec!["p1-0", "p1-1", "p2-0", "p2-1"]);
    assert!(!truncated);
}

#[test]
fn test_flatten_truncates_to_99_across_playlists() {
    let pages = vec![create_test_page("p1", 60), create_test_page("p2", 50)];

    let (ids, truncated) = flatten_track_ids(&pages, MAX_FEATURE_TRACKS);

    assert_eq!(ids.len(), 99);
    assert!(truncated);
    assert_eq!(ids[0], "p1-0");
    assert_eq!(ids[59], "p1-59");
    assert_eq!(ids[60], "p2-0");
    assert_eq!(ids[98], "p2-38");
    // The last 11 tracks of p2 are dropped
    assert!(!ids.iter().any(|id| id == "p2-39"));
}

#[test]
fn test_flatten_exactly_at_limit_is_not_truncated() {
    let pages = vec![create_test_page("p1", 99)];

    let (ids, truncated) = flatten_track_ids(&pages, MAX_FEATURE_TRACKS);

    assert_eq!(ids.len(), 99);
    assert!(!truncated);
}

#[test]
fn test_flatten_skips_items_without_track_id() {
    let pages = vec![PlaylistTracksPage {
        items: vec![
            PlaylistItem {
                track: Some(TrackRef {
                    id: Some("a".to_string()),
                }),
            },
            PlaylistItem { track: None },
            PlaylistItem {
                track: Some(TrackRef { id: None }),
            },
            PlaylistItem {
                track: Some(TrackRef {
                    id: Some("b".to_string()),
                }),
            },
        ],
        next: Some("https://api.spotify.com/v1/playlists/p/tracks?offset=4".to_string()),
    }];

    assert_eq!(track_ids(&pages[0]).collect::<Vec<_>>(), vec!["a", "b"]);

    let (ids, truncated) = flatten_track_ids(&pages, MAX_FEATURE_TRACKS);

    assert_eq!(ids, vec!["a", "b"]);
    assert!(!truncated);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}
