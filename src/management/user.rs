use crate::{
    error::{AppError, AppResult},
    spotify::SpotifyClient,
    types::UserOverview,
    utils::{self, PLAYLIST_PAGE_SIZE},
};

/// Profile of the current user together with one page of their playlists.
///
/// Pages are zero-based and hold [`PLAYLIST_PAGE_SIZE`] playlists; the caller
/// keeps track of which page it is on.
pub async fn user_overview(client: &SpotifyClient, page: u32) -> AppResult<UserOverview> {
    let user_info = client
        .get_me()
        .await
        .map_err(|e| AppError::upstream(e, AppError::NotFound))?;

    let user_playlists = client
        .get_user_playlists(utils::page_offset(page), PLAYLIST_PAGE_SIZE)
        .await
        .map_err(|e| AppError::upstream(e, AppError::NotFound))?;

    Ok(UserOverview {
        user_info,
        user_playlists,
    })
}
