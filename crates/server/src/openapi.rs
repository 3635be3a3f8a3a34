use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct WorkerDoc {
    pub id: i32,
    pub name: String,
    pub skill: String,
    pub location: String,
    /// 0.0 to 5.0
    pub rating: f64,
    pub contact: String,
}

#[derive(ToSchema)]
pub struct NewWorkerDoc {
    pub name: String,
    pub skill: String,
    pub location: String,
    pub rating: f64,
    pub contact: String,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub worker_id: i32,
    pub title: String,
    pub description: String,
    pub price_range: String,
}

#[derive(ToSchema)]
pub struct NewServiceDoc {
    pub worker_id: i32,
    pub title: String,
    pub description: String,
    pub price_range: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::workers::list_workers,
        crate::routes::workers::get_worker,
        crate::routes::workers::create_worker,
        crate::routes::services::list_services,
        crate::routes::services::get_service,
        crate::routes::services::create_service,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            WorkerDoc,
            NewWorkerDoc,
            ServiceDoc,
            NewServiceDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "workers"),
        (name = "services")
    )
)]
pub struct ApiDoc;
