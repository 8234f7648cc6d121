use turbo_core::ModelBroadcaster;
use turbo_server::{AppState, ServerResult, build_router, logger, templates};
use turbo_ws::{ChannelSender, Metrics, ShutdownCoordinator, StreamBroadcaster, StreamState};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = turbo_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Before any other logging
    logger::initialize(
        config.logging.level,
        log_file_path.as_deref(),
        config.logging.colored,
    )?;

    info!("Starting turbo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = turbo_db::connect(
        &database_path,
        config.database.pool_size,
        config.database.busy_timeout(),
    )
    .await?;

    info!("Running database migrations...");
    turbo_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let registry = templates::load(&config.template_path()?)?;
    info!("{} stream templates available", registry.len());

    let broadcaster = StreamBroadcaster::new(turbo_ws::BroadcastConfig {
        channel_capacity: config.broadcast.channel_capacity,
        send_buffer_size: config.broadcast.send_buffer_size,
        max_connections: config.server.max_connections,
    });
    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();

    let sender = ChannelSender::new(broadcaster.clone(), Arc::new(registry), metrics.clone());
    let model_broadcaster = ModelBroadcaster::new(Arc::new(sender));

    let streams = StreamState::new(broadcaster, metrics, shutdown.clone());
    let app = build_router(AppState::new(pool, model_broadcaster, streams));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
