use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog::CatalogError;
use common::{NewService, Service};
use tracing::info;

use crate::{errors::ApiError, routes::parse_id, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    responses(
        (status = 200, description = "All services, ascending id", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let services = state.store.list_services().await?;
    info!(count = services.len(), "list services");
    Ok(Json(services))
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_service(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Service>, ApiError> {
    let id = parse_id(&id).ok_or_else(CatalogError::service_not_found)?;
    Ok(Json(state.store.get_service(id).await?))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::NewServiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error (including unknown worker_id)", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<NewService>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let Json(input) = payload?;
    let created = state.store.create_service(input).await?;
    info!(id = created.id, worker_id = created.worker_id, title = %created.title, "created service");
    Ok((StatusCode::CREATED, Json(created)))
}
