use axum::{extract::State, http::StatusCode, middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{observability, openapi::ApiDoc, state::AppState};

pub mod services;
pub mod workers;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Database liveness probe in plain text.
async fn root(State(state): State<AppState>) -> (StatusCode, String) {
    match state.store.server_time().await {
        Ok(now) => (StatusCode::OK, format!("PostgreSQL connected! Server time: {now}")),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")),
    }
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Path ids that are not integers cannot name a stored record.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Build the full application router: catalog API plus probe, metrics and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/workers", get(workers::list_workers).post(workers::create_worker))
        .route("/api/workers/:id", get(workers::get_worker))
        .route("/api/services", get(services::list_services).post(services::create_service))
        .route("/api/services/:id", get(services::get_service));

    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(api)
        .with_state(state)
        .layer(middleware::from_fn(observability::track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
