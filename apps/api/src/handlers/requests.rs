use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use entitle_domain::{AccessRequestDraft, ApplicationId, RoleRef};

use crate::dto::{AccessRequestResponse, SubmitAccessRequestRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn submit_access_request_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAccessRequestRequest>,
) -> ApiResult<(StatusCode, Json<AccessRequestResponse>)> {
    let application_id = ApplicationId::new(payload.app_id)?;
    let draft = AccessRequestDraft {
        role: RoleRef {
            code: payload.role_code,
            name: payload.role_name,
        },
        reason: payload.reason,
    };
    let request = state
        .access_request_service
        .submit_request(application_id, payload.requested_for.as_str(), &draft)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccessRequestResponse::from(request)),
    ))
}

pub async fn list_access_requests_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AccessRequestResponse>>> {
    let requests = state
        .access_request_service
        .list_requests()
        .await?
        .into_iter()
        .map(AccessRequestResponse::from)
        .collect();

    Ok(Json(requests))
}
