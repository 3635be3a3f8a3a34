use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 3000 }

/// TLS mode passed to Postgres as `sslmode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    Prefer,
    #[default]
    Require,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" | "false" | "off" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" | "true" | "on" => Ok(SslMode::Require),
            other => Err(anyhow!("unsupported sslmode '{other}' (disable|prefer|require)")),
        }
    }
}

/// Storage connection parameters plus pool bounds.
///
/// `url` wins when set; otherwise the URL is assembled from the discrete
/// `host`/`port`/`user`/`password`/`name` fields and `ssl_mode`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default)]
    pub ssl_mode: SslMode,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: String::new(),
            name: default_db_name(),
            ssl_mode: SslMode::default(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            sqlx_logging: false,
        }
    }
}

fn default_db_host() -> String { "localhost".into() }
fn default_db_port() -> u16 { 5432 }
fn default_db_user() -> String { "postgres".into() }
fn default_db_name() -> String { "skilllink".into() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 5 }
fn default_acquire_timeout() -> u64 { 5 }
fn default_idle_timeout() -> u64 { 30 }
fn default_max_lifetime() -> u64 { 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origin: default_allowed_origin() }
    }
}

fn default_allowed_origin() -> String { "http://localhost:3001".into() }

/// Settings for the browsing client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: default_api_base_url(), timeout_secs: default_client_timeout() }
    }
}

fn default_api_base_url() -> String { "http://localhost:3000".into() }
fn default_client_timeout() -> u64 { 10 }

/// Load `config.toml` (or `CONFIG_PATH`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if std::path::Path::new(&path).exists() {
        load_from_file(&path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File, then process environment, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env_with(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment values on top of the file configuration.
    /// `lookup` abstracts the environment so tests can feed a map.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("SERVER_HOST") { self.server.host = v; }
        if let Some(v) = get("SERVER_PORT") {
            self.server.port = v.parse().map_err(|_| anyhow!("SERVER_PORT is not a valid port: {v}"))?;
        }
        if let Some(v) = get("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = v.parse().ok();
        }

        let db = &mut self.database;
        if let Some(v) = get("DATABASE_URL") { db.url = v; }
        if let Some(v) = get("DB_HOST") { db.host = v; }
        if let Some(v) = get("DB_PORT") {
            db.port = v.parse().map_err(|_| anyhow!("DB_PORT is not a valid port: {v}"))?;
        }
        if let Some(v) = get("DB_USER") { db.user = v; }
        if let Some(v) = get("DB_PASSWORD") { db.password = v; }
        if let Some(v) = get("DB_NAME") { db.name = v; }
        if let Some(v) = get("DB_SSLMODE") { db.ssl_mode = v.parse()?; }

        if let Some(v) = get("CORS_ORIGIN") { self.cors.allowed_origin = v; }
        if let Some(v) = get("API_BASE_URL") { self.client.api_base_url = v; }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        if self.cors.allowed_origin.trim().is_empty() {
            return Err(anyhow!("cors.allowed_origin must not be empty"));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Connection URL handed to the pool.
    pub fn connection_url(&self) -> Result<String> {
        if !self.url.trim().is_empty() {
            return Ok(self.url.trim().to_string());
        }
        let mut url = Url::parse(&format!("postgres://{}:{}/{}", self.host, self.port, self.name))
            .map_err(|e| anyhow!("invalid database host/name: {e}"))?;
        url.set_username(&self.user)
            .map_err(|_| anyhow!("database.user cannot be encoded into a URL"))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| anyhow!("database.password cannot be encoded into a URL"))?;
        }
        url.query_pairs_mut().append_pair("sslmode", self.ssl_mode.as_str());
        Ok(url.to_string())
    }

    /// `host:port/name` without credentials, for log lines.
    pub fn redacted_target(&self) -> String {
        if !self.url.trim().is_empty() {
            return match Url::parse(self.url.trim()) {
                Ok(u) => format!("{}://{}{}", u.scheme(), u.host_str().unwrap_or(""), u.path()),
                Err(_) => "<unparseable url>".to_string(),
            };
        }
        format!("{}:{}/{}", self.host, self.port, self.name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            if self.host.trim().is_empty() {
                return Err(anyhow!("database.host is empty; set DB_HOST or DATABASE_URL"));
            }
            if self.name.trim().is_empty() {
                return Err(anyhow!("database.name is empty; set DB_NAME or DATABASE_URL"));
            }
        } else {
            let lower = self.url.trim().to_lowercase();
            if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
                return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
            }
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0
            || self.acquire_timeout_secs == 0
            || self.idle_timeout_secs == 0
            || self.max_lifetime_secs == 0
        {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
