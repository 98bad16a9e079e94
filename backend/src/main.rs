//! Backend entry-point: loads settings, applies migrations and serves the
//! family REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use family_office::config::ServerSettings;
use family_office::inbound::http::health::HealthState;
use family_office::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database schema up to date");
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let pool_config = settings.pool_config().map_err(std::io::Error::other)?;

    if settings.skip_migrations {
        warn!("skipping database migrations");
    } else {
        apply_migrations(pool_config.database_url()).await?;
    }

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = settings.bind_addr().to_owned();
    info!(%bind_addr, "starting server");
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    server.await
}
