#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DATABASE_URL};
use configs::DatabaseConfig;

// Migrations run at most once per test process; `false` means the database is unreachable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 20,
        min_connections: 1,
        connect_timeout_secs: 5,
        acquire_timeout_secs: 10,
        ..DatabaseConfig::default()
    }
}

/// Fresh connection for the current test's runtime, or `None` when database tests are skipped.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }

    let ready = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&test_config()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !ready {
        return Ok(None);
    }

    let db = connect_with_config(&test_config()).await?;
    Ok(Some(db))
}
