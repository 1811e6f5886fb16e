use axum_helpers::server::create_app;
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

use items_api::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;

    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = items_api::app(&state);

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting Items API"
    );

    create_app(app, &state.config.server)
        .await
        .wrap_err("Server error")?;

    info!(
        items = state.items.len().await,
        "Items API shutdown complete, discarding in-memory items"
    );
    Ok(())
}
