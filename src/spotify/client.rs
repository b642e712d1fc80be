use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    spotify::error::{SpotifyError, check},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, PlaylistTracksPage,
    },
};

/// Maximum number of items the Web API accepts when adding tracks to a
/// playlist in one request.
pub const ADD_TRACKS_BATCH: usize = 100;

/// Web API client bound to a single access token.
///
/// Built per request and dropped with it. The underlying `reqwest::Client`
/// (and its connection pool) is shared, the token is not.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(http: Client, config: Arc<Config>, access_token: impl Into<String>) -> Self {
        SpotifyClient {
            http,
            config,
            access_token: access_token.into(),
        }
    }

    /// `GET /me`
    pub async fn get_me(&self) -> Result<Value, SpotifyError> {
        self.get_json(&["me"], &[]).await
    }

    /// `GET /me/playlists`
    pub async fn get_user_playlists(&self, offset: u32, limit: u32) -> Result<Value, SpotifyError> {
        self.get_json(
            &["me", "playlists"],
            &[("offset", offset.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// `GET /playlists/{id}/tracks`, one page of track ids plus the `next`
    /// link.
    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<PlaylistTracksPage, SpotifyError> {
        self.get_json(
            &["playlists", playlist_id, "tracks"],
            &[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
                ("fields", "items(track(id)),next".to_string()),
            ],
        )
        .await
    }

    /// `GET /audio-features?ids=...`
    ///
    /// The provider caps the batch at 100 ids; callers are expected to stay
    /// under it.
    pub async fn get_audio_features_for_tracks(
        &self,
        track_ids: &[String],
    ) -> Result<Value, SpotifyError> {
        self.get_json(&["audio-features"], &[("ids", track_ids.join(","))])
            .await
    }

    /// `POST /users/{user_id}/playlists`
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatePlaylistResponse, SpotifyError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            public: true,
        };

        let response = self
            .request(Method::POST, &["users", user_id, "playlists"])?
            .json(&body)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// `POST /playlists/{id}/tracks`, in batches of [`ADD_TRACKS_BATCH`].
    ///
    /// Batches are sent one after the other so the playlist keeps the order of
    /// `uris`. Returns the snapshot id of every batch.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<Vec<String>, SpotifyError> {
        let mut snapshots = Vec::new();

        for chunk in uris.chunks(ADD_TRACKS_BATCH) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };

            let response = self
                .request(Method::POST, &["playlists", playlist_id, "tracks"])?
                .json(&body)
                .send()
                .await?;

            let added: AddTrackToPlaylistResponse = check(response).await?.json().await?;
            snapshots.push(added.snapshot_id);
        }

        Ok(snapshots)
    }

    /// `GET /playlists/{id}`
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Value, SpotifyError> {
        self.get_json(&["playlists", playlist_id], &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        let response = self
            .request(Method::GET, segments)?
            .query(query)
            .send()
            .await?;

        Ok(check(response).await?.json::<T>().await?)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, SpotifyError> {
        let url = self.endpoint(segments)?;
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(&self.access_token))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SpotifyError> {
        let mut url =
            Url::parse(&self.config.api_url).map_err(|e| SpotifyError::Request(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| SpotifyError::Request(format!("invalid API url {}", self.config.api_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
