use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::{AppError, AppResult},
    management,
    server::AppState,
    types::{UserOverview, UserQuery},
};

pub async fn user(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<UserOverview>> {
    let page = match params.page.as_deref().map(str::trim) {
        None | Some("") => 0,
        Some(page) => page.parse::<u32>().map_err(|_| {
            AppError::Validation(format!("page must be a non-negative integer, got {page}"))
        })?,
    };

    let client = state.client_for(params.credentials.as_deref()).await?;
    let overview = management::user_overview(&client, page).await?;
    Ok(Json(overview))
}
