use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog::CatalogError;
use common::{NewWorker, Worker};
use tracing::info;

use crate::{errors::ApiError, routes::parse_id, state::AppState};

#[utoipa::path(
    get, path = "/api/workers", tag = "workers",
    responses(
        (status = 200, description = "All workers, ascending id", body = [crate::openapi::WorkerDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_workers(State(state): State<AppState>) -> Result<Json<Vec<Worker>>, ApiError> {
    let workers = state.store.list_workers().await?;
    info!(count = workers.len(), "list workers");
    Ok(Json(workers))
}

#[utoipa::path(
    get, path = "/api/workers/{id}", tag = "workers",
    params(("id" = i32, Path, description = "Worker id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::WorkerDoc),
        (status = 404, description = "Worker not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_worker(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Worker>, ApiError> {
    let id = parse_id(&id).ok_or_else(CatalogError::worker_not_found)?;
    Ok(Json(state.store.get_worker(id).await?))
}

#[utoipa::path(
    post, path = "/api/workers", tag = "workers",
    request_body = crate::openapi::NewWorkerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::WorkerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_worker(
    State(state): State<AppState>,
    payload: Result<Json<NewWorker>, JsonRejection>,
) -> Result<(StatusCode, Json<Worker>), ApiError> {
    let Json(input) = payload?;
    let created = state.store.create_worker(input).await?;
    info!(id = created.id, name = %created.name, skill = %created.skill, "created worker");
    Ok((StatusCode::CREATED, Json(created)))
}
