//! Products API - REST server

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{build_router, config::Config, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let router = build_router(&state);

    info!(
        environment = ?state.config.environment,
        "Starting {} v{}",
        state.config.app.name,
        state.config.app.version
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
