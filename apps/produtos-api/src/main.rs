//! Produtos API - REST server for the product catalogue

use axum_helpers::server::{close_database, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config, run_migrations};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        backend = ?config.database.backend(),
        "Connecting to database"
    );
    let db = connect_from_config(config.database.clone()).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &config.server).await?;

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    let db = state.db.clone();
    create_production_app(
        router,
        &config.server,
        config.server.shutdown_timeout(),
        async move {
            info!("Shutting down: closing database connections");
            close_database(db, "produtos").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Produtos API shutdown complete");
    Ok(())
}
