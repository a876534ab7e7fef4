use coffeehouse::repositories::seed_default_coffees;
use coffeehouse::{AppState, config::Config, create_router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza il logging (RUST_LOG per cambiare livello)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Scegli il backend: SQLite se DATABASE_URL è presente, altrimenti memoria
    let state = match &config.database_url {
        Some(url) => {
            let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
            let pool = SqlitePoolOptions::new().connect_with(options).await?;
            sqlx::migrate!().run(&pool).await?;
            AppState::with_sqlite(pool)
        }
        None => AppState::in_memory(),
    };

    // Carica i quattro caffè di default (no-op se lo store è già popolato)
    if config.seed_data {
        seed_default_coffees(state.store.as_ref()).await?;
    }

    // Crea il router
    let app = create_router(Arc::new(state));

    // Crea il listener TCP e avvia il server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
