

use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the catalog schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}

pub(crate) fn new_worker(name: &str, skill: &str, rating: f64) -> common::NewWorker {
    common::NewWorker {
        name: name.to_string(),
        skill: skill.to_string(),
        location: "Los Angeles, CA".to_string(),
        rating,
        contact: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
    }
}

pub(crate) fn new_service(worker_id: i32, title: &str) -> common::NewService {
    common::NewService {
        worker_id,
        title: title.to_string(),
        description: format!("{title} by a local professional."),
        price_range: "$50 - $100".to_string(),
    }
}
