use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use entitle_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/applications",
            get(handlers::applications::list_applications_handler)
                .post(handlers::applications::create_application_handler),
        )
        .route(
            "/api/applications/{app_id}",
            get(handlers::applications::get_application_handler)
                .put(handlers::applications::update_application_handler)
                .delete(handlers::applications::delete_application_handler),
        )
        .route("/api/users", get(handlers::users::list_users_handler))
        .route("/api/users/{user_id}", get(handlers::users::get_user_handler))
        .route(
            "/api/access-requests",
            get(handlers::requests::list_access_requests_handler)
                .post(handlers::requests::submit_access_request_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
