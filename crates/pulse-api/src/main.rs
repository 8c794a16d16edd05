//! Pulse API Service Binary

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse_api::{router, AppState, PulseConfig};
use pulse_common::VERSION;
use pulse_planner::DeliveryPlanner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    info!("Starting Pulse API v{}", VERSION);

    // Load configuration
    let config = PulseConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let planner = DeliveryPlanner::new(&config.planner)?;
    info!(
        "Planner: orders_per_trip={}, lunch={}min, dinner={}min, thresholds={:?}",
        config.planner.orders_per_trip,
        config.planner.lunch_minutes,
        config.planner.dinner_minutes,
        config.planner.thresholds
    );

    let app = router(AppState::new(planner));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on {}", addr);

    // Start the server with graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down Pulse API");
    Ok(())
}
