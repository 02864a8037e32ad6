mod campaigns;
mod inputs;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Error surface of the HTTP layer: a status code plus a flat
/// `{"error": "..."}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Map a store error to the wire contract.
///
/// Validation failures are the client's fault (400). A missing record on
/// a by-id fetch surfaces as a plain 500 whose message carries the
/// not-found detail; everything else is an opaque 500.
pub(super) fn map_db_error(error: &launchkit_db::DbError) -> ApiError {
    if error.is_validation() {
        return ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Missing required fields: {error}"),
        );
    }
    if matches!(error, launchkit_db::DbError::NotFound) {
        return ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch campaign: record not found",
        );
    }
    tracing::error!(error = %error, "store operation failed");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/inputs",
            get(inputs::list_inputs).post(inputs::create_input),
        )
        .route(
            "/campaigns",
            get(campaigns::list_campaigns).post(campaigns::create_campaign),
        )
        .route("/campaigns/{id}", get(campaigns::get_campaign))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match launchkit_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}
