//! Backend entry-point: loads settings, prepares the user store and serves
//! the users REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use signup_backend::inbound::http::health::HealthState;
use signup_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;

    let mut config = ServerConfig::new(settings.bind_addr()?, settings.client_origin()?);
    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}
