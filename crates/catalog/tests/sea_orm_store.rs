use catalog::{CatalogError, CatalogStore, SeaOrmCatalogStore};
use common::{NewService, NewWorker};

async fn store() -> anyhow::Result<SeaOrmCatalogStore> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;
    Ok(SeaOrmCatalogStore::new(db))
}

fn worker(name: &str, skill: &str, rating: f64) -> NewWorker {
    NewWorker {
        name: name.into(),
        skill: skill.into(),
        location: "New York, NY".into(),
        rating,
        contact: "hello@example.com".into(),
    }
}

fn service(worker_id: i32, title: &str) -> NewService {
    NewService {
        worker_id,
        title: title.into(),
        description: "Expert work.".into(),
        price_range: "$75 - $150".into(),
    }
}

#[tokio::test]
async fn get_after_create_returns_the_created_record() -> anyhow::Result<()> {
    let store = store().await?;
    for (name, skill, rating) in [("John Doe", "Plumber", 4.8), ("Jane Smith", "Electrician", 4.9)] {
        let created = store.create_worker(worker(name, skill, rating)).await?;
        assert_eq!(store.get_worker(created.id).await?, created);
    }
    let w = store.list_workers().await?.remove(0);
    let s = store.create_service(service(w.id, "Drain Cleaning")).await?;
    assert_eq!(store.get_service(s.id).await?, s);
    Ok(())
}

#[tokio::test]
async fn lists_are_in_ascending_id_order() -> anyhow::Result<()> {
    let store = store().await?;
    assert!(store.list_workers().await?.is_empty());
    assert!(store.list_services().await?.is_empty());

    let a = store.create_worker(worker("A", "Plumber", 3.0)).await?;
    let b = store.create_worker(worker("B", "Painter", 4.0)).await?;
    for (owner, title) in [(b.id, "Interior Painting"), (a.id, "Pipe Repair"), (b.id, "Fence Painting")] {
        store.create_service(service(owner, title)).await?;
    }
    let workers = store.list_workers().await?;
    assert!(workers.windows(2).all(|w| w[0].id <= w[1].id));
    let services = store.list_services().await?;
    assert_eq!(services.len(), 3);
    assert!(services.windows(2).all(|s| s[0].id <= s[1].id));
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_not_found() -> anyhow::Result<()> {
    let store = store().await?;
    let err = store.get_worker(404).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound("Worker")));
    assert_eq!(err.to_string(), "Worker not found");
    let err = store.get_service(404).await.unwrap_err();
    assert_eq!(err.to_string(), "Service not found");
    Ok(())
}

#[tokio::test]
async fn service_for_unknown_worker_is_a_validation_error() -> anyhow::Result<()> {
    let store = store().await?;
    let err = store.create_service(service(77, "Electrical Wiring")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got {err:?}");
    assert!(store.list_services().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn service_worker_lookup_agrees_with_worker_list() -> anyhow::Result<()> {
    let store = store().await?;
    let john = store.create_worker(worker("John Doe", "Plumber", 4.8)).await?;
    let jane = store.create_worker(worker("Jane Smith", "Electrician", 4.9)).await?;
    store.create_service(service(john.id, "Drain Cleaning")).await?;
    store.create_service(service(jane.id, "Electrical Wiring")).await?;

    let workers = store.list_workers().await?;
    for s in store.list_services().await? {
        let by_id = store.get_worker(s.worker_id).await?;
        let by_list: Vec<_> = workers.iter().filter(|w| w.id == s.worker_id).collect();
        assert_eq!(by_list, vec![&by_id]);
    }
    Ok(())
}

#[tokio::test]
async fn clock_probe_answers() -> anyhow::Result<()> {
    let store = store().await?;
    assert!(!store.server_time().await?.is_empty());
    Ok(())
}

const LONG_PRICE: &str = "$500+ for a standard house, $1000+ for commercial buildings, quotes on request";

async fn assert_long_free_text_is_stored(store: &SeaOrmCatalogStore) -> anyhow::Result<()> {
    let name = format!("Jane {}", "Smith-".repeat(25));
    assert!(name.len() > 128);
    let w = store.create_worker(worker(&name, "Electrician", 4.9)).await?;
    assert_eq!(store.get_worker(w.id).await?.name, name);

    assert!(LONG_PRICE.len() > 64);
    let mut input = service(w.id, "Electrical Wiring");
    input.price_range = LONG_PRICE.into();
    let s = store.create_service(input).await?;
    assert_eq!(store.get_service(s.id).await?.price_range, LONG_PRICE);
    Ok(())
}

#[tokio::test]
async fn long_free_text_values_are_accepted() -> anyhow::Result<()> {
    let store = store().await?;
    assert_long_free_text_is_stored(&store).await
}

/// Same check on Postgres, where column types enforce lengths; only when a database is configured
#[tokio::test]
async fn long_free_text_values_are_accepted_on_postgres() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping postgres test (no DATABASE_URL or SKIP_DB_TESTS set)");
        return Ok(());
    }
    let cfg = configs::AppConfig::load_and_validate()?;
    let store = catalog::open(&cfg.database).await?;
    assert_long_free_text_is_stored(&store).await
}
