//! Backend entry-point: loads settings, prepares storage, and serves the contacts API.

use actix_web::web;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_migrations};
use backend::settings::ServerSettings;

mod server;

use server::{ServerConfig, create_server, mark_unhealthy_on, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load server settings")?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url() {
        run_migrations(&database_url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(settings.pool_config(&database_url))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server =
        create_server(health_state.clone(), config).wrap_err("failed to bind HTTP server")?;
    actix_web::rt::spawn(mark_unhealthy_on(shutdown_signal(), health_state));
    server.await.wrap_err("HTTP server terminated with an error")
}
