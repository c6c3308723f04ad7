mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{
    config::Config, error::AppError, router::router, scheduler::maintenance, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(db.clone(), http_client, &config);

    maintenance::run_on_startup(&db, &state.cache).await;

    let scheduler_db = db.clone();
    let scheduler_cache = state.cache.clone();
    tokio::spawn(async move {
        if let Err(e) = maintenance::start_scheduler(scheduler_db, scheduler_cache).await {
            tracing::error!("Maintenance scheduler error: {}", e);
        }
    });

    let app = router(state, session)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "Serving on {} under {}",
        config.bind_addr,
        if config.base_path.is_empty() { "/" } else { &config.base_path }
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
