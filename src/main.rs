use std::sync::Arc;

use account_service::{make_app, store, AppState, Config};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = Config::init();
    info!("Connecting to PostgreSQL...");
    let pool = store::connect_sqlx(&config.db_url).await;
    sqlx::migrate!().run(&pool).await?;
    info!("Connected to PostgreSQL!");

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState {
        store: Box::new(store::PgAccountStore::new(pool)),
        config,
    });

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Account service listening on {}", bind_addr);
    axum::serve(listener, make_app(state)).await?;
    Ok(())
}
