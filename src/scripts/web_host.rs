use anyhow::Context;
use axum::serve;
use seed_loader::api::{create_router, AppState};
use seed_loader::config::WebConfig;
use seed_loader::store;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = WebConfig::load()?;
    println!(
        "Configuration loaded: environment={} server={} provider={}",
        config.environment,
        config.server_address(),
        config.db_provider
    );

    let persistence = store::install(&config)
        .with_context(|| format!("Failed to install {} persistence", config.db_provider))?;

    let state = Arc::new(AppState { persistence });
    let app = create_router(state, config.is_development());

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Web host running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
