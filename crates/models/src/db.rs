use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use tracing::info;

/// Idle timeout and lifetime for an in-memory SQLite pool. The pool only
/// accepts durations, and recycling its single connection would reopen an
/// empty, unmigrated database.
pub const IN_MEMORY_RETENTION: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

/// Pool options derived from configuration.
///
/// Acquiring a connection waits at most `acquire_timeout_secs`; after that the
/// caller gets a storage error instead of queueing forever.
pub fn pool_options(cfg: &DatabaseConfig) -> anyhow::Result<ConnectOptions> {
    let url = cfg.connection_url()?;
    // an in-memory SQLite database exists per connection, so pin the pool to one
    let in_memory = is_in_memory(&url);
    let mut opt = ConnectOptions::new(url);
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if in_memory {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_RETENTION)
            .max_lifetime(IN_MEMORY_RETENTION);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    Ok(opt)
}

/// Open a bounded pool from configuration.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let opt = pool_options(cfg)?;
    let max = opt.get_max_connections().unwrap_or(cfg.max_connections);
    let db = Database::connect(opt).await?;
    info!(db = %cfg.redacted_target(), max_connections = max, "database pool ready");
    Ok(db)
}

/// Connect using `config.toml` + environment.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::AppConfig::load_and_validate()?;
    connect_with_config(&cfg.database).await
}

/// Private SQLite database living in a single pooled connection.
/// Every call yields an independent, empty database.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .idle_timeout(IN_MEMORY_RETENTION)
        .max_lifetime(IN_MEMORY_RETENTION)
        .sqlx_logging(false);
    Database::connect(opt).await
}

/// Apply all pending catalog migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await
}

/// Database clock rendered as text; doubles as a connectivity probe.
pub async fn server_time(db: &DatabaseConnection) -> Result<String, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => "SELECT NOW()::text AS now",
        DatabaseBackend::Sqlite => "SELECT datetime('now') AS now",
        _ => "SELECT CAST(NOW() AS CHAR) AS now",
    };
    let row = db
        .query_one(Statement::from_string(backend, sql))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("clock query returned no row".into()))?;
    row.try_get::<String>("", "now")
}
