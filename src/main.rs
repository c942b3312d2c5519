use bookswap::{
    adapters::in_memory,
    api::{handlers::AppState, router::create_router},
    config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters
    let service_deps = in_memory::dependencies(config.seed_demo_data);
    tracing::info!(seed_demo_data = config.seed_demo_data, "in-memory stores ready");

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps,
        submit_delay: config.submit_delay,
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
