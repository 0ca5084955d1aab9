//! Sand Clock - a fixed five-minute countdown display
//! 
//! This is the main entry point for the sand-clock application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use sand_clock::{
    api::create_router,
    config::Config,
    display::DisplayBinding,
    state::AppState,
    tasks::console_display_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("sand_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting sand-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Render every published state to the console
    if !config.quiet {
        let binding = DisplayBinding::new(&state.engine);
        tokio::spawn(console_display_task(binding));
    }

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start the countdown from 5:00");
    info!("  POST /stop   - Stop the countdown and clear the time");
    info!("  GET  /status - Current time, progress and last action");
    info!("  GET  /events - Server-sent stream of timer states");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
