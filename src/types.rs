use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token set returned by the accounts service for a code exchange or refresh.
///
/// `expires_at` is not part of the provider payload; it is stamped locally
/// (epoch milliseconds) so the frontend can build a [`Session`] without doing
/// its own clock arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenBundle {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: i64,
}

/// Client-held session, passed in on every request as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Epoch milliseconds after which `access_token` is invalid.
    pub expires_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeQuery {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub credentials: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesQuery {
    pub credentials: Option<String>,
    #[serde(alias = "playlistId")]
    pub playlist_ids: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistQuery {
    pub credentials: Option<String>,
    pub playlist_name: Option<String>,
    pub tracks: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub user_info: Value,
    pub user_playlists: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistFeatures {
    pub track_features: Value,
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPlaylist {
    pub retrieved_playlist: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Error envelope used by the Web API (`{"error": {"status", "message"}}`)
/// and the accounts service (`{"error", "error_description"}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProviderErrorDetail {
    Detailed { message: String },
    Code(String),
}

impl ProviderErrorBody {
    pub fn message(&self) -> String {
        match (&self.error, &self.error_description) {
            (_, Some(description)) => description.clone(),
            (ProviderErrorDetail::Detailed { message }, None) => message.clone(),
            (ProviderErrorDetail::Code(code), None) => code.clone(),
        }
    }
}
