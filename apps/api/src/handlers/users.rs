use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::dto::UserResponse;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    search: Option<String>,
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = match params.search {
        Some(term) => state.user_service.search_users(term.as_str()).await?,
        None => state.user_service.list_users().await?,
    };

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.find_user(user_id.as_str()).await?;

    Ok(Json(UserResponse::from(user)))
}
