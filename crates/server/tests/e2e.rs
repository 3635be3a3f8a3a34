use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use client::{CatalogApi, CatalogSource, HttpCatalogApi, Screen, Session, Tier, View};
use common::{ErrorBody, NewService, NewWorker, Worker};
use configs::{CorsConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;

use server::{startup, AppState};

struct TestApp {
    base_url: String,
}

/// Serve the real router over TCP on an ephemeral port, backed by a fresh
/// migrated SQLite database.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let store = catalog::open(&cfg).await?;

    let app = startup::app(AppState::new(Arc::new(store)), &CorsConfig::default())?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn api(app: &TestApp) -> anyhow::Result<HttpCatalogApi> {
    Ok(HttpCatalogApi::new(app.base_url.clone(), Duration::from_secs(5))?)
}

fn worker(name: &str, skill: &str, location: &str, rating: f64, contact: &str) -> NewWorker {
    NewWorker { name: name.into(), skill: skill.into(), location: location.into(), rating, contact: contact.into() }
}

#[tokio::test]
async fn e2e_public_health_and_probe() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = start_server().await?;
    let http = reqwest::Client::new();

    let res = http.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = http.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.starts_with("PostgreSQL connected! Server time: "));
    Ok(())
}

#[tokio::test]
async fn e2e_worker_detail_lists_exactly_its_services() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = start_server().await?;
    let api = api(&app)?;

    api.create_worker(&worker("John Doe", "Plumber", "New York, NY", 4.8, "john.doe@email.com")).await?;
    let jane = api
        .create_worker(&worker("Jane Smith", "Electrician", "Los Angeles, CA", 4.9, "jane.smith@email.com"))
        .await?;
    assert_eq!(jane.id, 2);
    api.create_service(&NewService {
        worker_id: 2,
        title: "Electrical Wiring".into(),
        description: "New home and renovation electrical wiring installation.".into(),
        price_range: "$500+".into(),
    })
    .await?;

    let fetched: Worker = api.get_worker(2).await?;
    assert_eq!(fetched, jane);

    let loaded = CatalogSource::new(api).load().await;
    assert_eq!(loaded.tier, Tier::Primary);
    let mut session = Session::new(loaded);
    session.select_worker(2);
    match session.screen() {
        Screen::WorkerDetail { worker, services } => {
            assert_eq!(worker.name, "Jane Smith");
            let titles: Vec<&str> = services.iter().map(|s| s.title.as_str()).collect();
            assert_eq!(titles, vec!["Electrical Wiring"]);
        }
        other => panic!("unexpected screen: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn e2e_nonexistent_worker_is_404_and_renders_not_found() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = start_server().await?;

    let res = reqwest::get(format!("{}/api/workers/999", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<ErrorBody>().await?, ErrorBody::new("Worker not found"));

    let res = reqwest::get(format!("{}/api/services/999", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let mut session = Session::new(CatalogSource::new(api(&app)?).load().await);
    session.navigate(View::WorkerDetail(999));
    assert_eq!(session.screen().to_string(), "Worker not found.\n");
    Ok(())
}

#[tokio::test]
async fn e2e_service_for_unknown_worker_is_rejected() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = start_server().await?;
    let err = api(&app)?
        .create_service(&NewService {
            worker_id: 42,
            title: "Ghost Service".into(),
            description: String::new(),
            price_range: "$0".into(),
        })
        .await
        .unwrap_err();
    match err {
        client::ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("worker_id 42"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}
