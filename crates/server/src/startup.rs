use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use configs::{AppConfig, ServerConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::exam::{
    repo::seaorm::SeaOrmExamRepository, repository::memory::InMemoryExamRepository, ExamRepository,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::routes;
use crate::state::ServerState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Open the configured store. For PostgreSQL this connects the pool and, unless disabled,
/// applies pending migrations.
pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn ExamRepository>> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!(event = "storage_memory", "using in-memory exam storage; records are lost on restart");
            Ok(Arc::new(InMemoryExamRepository::new()))
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!(event = "migrations_applied", "database schema up to date");
            }
            Ok(Arc::new(SeaOrmExamRepository::new(db)))
        }
    }
}

pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let repo = build_repository(cfg).await?;
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}

/// Serve with an already loaded configuration until a shutdown signal arrives.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "exam scheduler listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

/// Public entry: load `.env` and configuration, then serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let server = ServerConfig { host: "0.0.0.0".into(), port: 9090, worker_threads: None };
        assert_eq!(bind_addr(&server).unwrap(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
        let bad = ServerConfig { host: "not a host".into(), port: 1, worker_threads: None };
        assert!(bind_addr(&bad).is_err());
    }

    #[tokio::test]
    async fn memory_backend_builds_without_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let repo = build_repository(&cfg).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
