//! Book-store server: reads DB_* settings, connects the pool, ensures the books table, serves `/api/v1`.
//!
//! Run from repo root: `cargo run -p bookstore-server --bin bookstore-server`

use bookstore_api::{
    app_router, ensure_books_table, AppState, DbConfig, InMemoryBoardingRepository, PgBookRepository, PoolConfig,
    ServerConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;

const DEFAULT_LOG_FILTER: &str = "bookstore_api=info,bookstore_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let db = DbConfig::from_env()?;
    let server = ServerConfig::from_env()?;

    let pool = PoolConfig::default().connect(&db).await?;
    ensure_books_table(&pool).await?;

    let state = AppState::new(
        Arc::new(PgBookRepository::new(pool.clone())),
        Arc::new(InMemoryBoardingRepository::seeded()),
    );
    let app = app_router(state);

    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
