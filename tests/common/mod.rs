#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use reqwest::Url;
use serde_json::{Value, json};
use tower::ServiceExt;
use tuneproxy::{
    config::Config,
    server::{AppState, build_router},
    spotify::SpotifyAuth,
    types::Session,
    utils,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

/// `base64("test-client:test-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// Config pointing both Spotify services at the mock server.
pub fn test_config(mock_uri: &str) -> Config {
    Config {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        api_url: format!("{mock_uri}/v1"),
        accounts_url: mock_uri.to_string(),
        scopes: vec![
            "user-read-private".to_string(),
            "playlist-modify-public".to_string(),
        ],
        upstream_timeout: Duration::from_secs(5),
    }
}

pub fn test_auth(mock_uri: &str) -> SpotifyAuth {
    SpotifyAuth::new(reqwest::Client::new(), Arc::new(test_config(mock_uri)))
}

pub fn build_test_app(mock_uri: &str) -> Router {
    let state = AppState::new(test_config(mock_uri)).expect("state");
    build_router(state)
}

pub fn session(access_token: &str, expires_at: i64) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at,
    }
}

/// Session JSON valid for another hour.
pub fn live_credentials() -> String {
    serde_json::to_string(&session("live-token", utils::now_millis() + 3_600_000)).unwrap()
}

/// Session JSON that expired a minute ago.
pub fn expired_credentials() -> String {
    serde_json::to_string(&session("stale-token", utils::now_millis() - 60_000)).unwrap()
}

/// Builds `path?key=value&...` with proper percent-encoding.
pub fn uri(path: &str, params: &[(&str, &str)]) -> String {
    let url = Url::parse_with_params(&format!("http://localhost{path}"), params).unwrap();
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Page of playlist items with ids `{prefix}-0 .. {prefix}-{count-1}`.
pub fn tracks_page(prefix: &str, count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| json!({ "track": { "id": format!("{prefix}-{i}") } }))
        .collect();
    json!({ "items": items, "next": null })
}

/// One page of a longer playlist: `items` as given, `next` set when
/// `has_more`.
pub fn paged_tracks(ids: &[Option<String>], has_more: bool) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| match id {
            Some(id) => json!({ "track": { "id": id } }),
            None => json!({ "track": null }),
        })
        .collect();
    let next = has_more.then(|| "https://api.spotify.com/v1/playlists/next-page".to_string());
    json!({ "items": items, "next": next })
}

pub async fn mount_refresh(server: &MockServer, access_token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "scope": "user-read-private",
            "expires_in": 3600
        })))
        .expect(times)
        .mount(server)
        .await;
}
