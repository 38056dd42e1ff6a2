use hotels_server::{AppState, config::Config, create_router, repositories::Repositories};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;

    // RUST_LOG ha la precedenza su LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.print_info();

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;
    info!("Connected to database");

    let state = Arc::new(AppState::new(
        Repositories::mysql(pool),
        config.jwt_secret.clone(),
    ));

    // Crea il router
    let app = create_router(state).layer(CorsLayer::permissive());

    // Crea il listener TCP
    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Server listening on http://{}", config.server_addr());

    // Avvia il server
    axum::serve(listener, app).await?;

    Ok(())
}
