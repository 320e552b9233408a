use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronosketch::api::router;
use chronosketch::config::AppConfig;
use chronosketch::db;
use chronosketch::schedule::weekly_schedule;
use chronosketch::services::TodoStore;
use chronosketch::sheets::SheetsHttpClient;
use chronosketch::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "chronosketch=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env();

    let pool = db::connect(&config.database_url).await?;

    let sheets = Arc::new(SheetsHttpClient::new()?);
    let store = TodoStore::load(pool.clone(), sheets, &config.sync).await;

    let state = AppState::new(pool, weekly_schedule(), store);

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
