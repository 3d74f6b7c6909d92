use std::time::Duration;

use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    DatabaseConfig::from_env().url
});

/// Connect using `DATABASE_URL` and default pool settings.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: DATABASE_URL.clone(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}

/// Connect with explicit pool sizing and timeouts.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(
        event = "db_connected",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}

/// Round-trip to the database; fails when the pool cannot reach it.
pub async fn ping(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.ping().await?;
    Ok(())
}
