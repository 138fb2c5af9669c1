use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use entitle_domain::{Application, ApplicationId};

use crate::dto::{ApplicationResponse, DeleteApplicationResponse, SaveApplicationRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_applications_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let applications = state
        .application_directory
        .list_applications()
        .await?
        .into_iter()
        .map(ApplicationResponse::from)
        .collect();

    Ok(Json(applications))
}

pub async fn create_application_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveApplicationRequest>,
) -> ApiResult<(StatusCode, Json<ApplicationResponse>)> {
    let profile = payload.into_profile()?;
    let application = state
        .application_directory
        .create_application(profile)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

pub async fn get_application_handler(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> ApiResult<Json<ApplicationResponse>> {
    let id = ApplicationId::new(app_id)?;
    let application = state.application_directory.find_application(&id).await?;

    Ok(Json(ApplicationResponse::from(application)))
}

pub async fn update_application_handler(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
    Json(payload): Json<SaveApplicationRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let id = ApplicationId::new(app_id)?;
    let profile = payload.into_profile()?;
    let application = state
        .application_directory
        .update_application(Application::new(id, profile))
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

pub async fn delete_application_handler(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> ApiResult<Json<DeleteApplicationResponse>> {
    let id = ApplicationId::new(app_id)?;
    let receipt = state.application_directory.delete_application(&id).await?;

    Ok(Json(DeleteApplicationResponse {
        success: true,
        app_id: receipt.id.as_str().to_owned(),
    }))
}
