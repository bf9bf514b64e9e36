/// SpaceX dashboard service entry point
use rust_spacex::cache::Cache;
use rust_spacex::clients::SpaceXClient;
use rust_spacex::config::AppConfig;
use rust_spacex::domain::ResourceKey;
use rust_spacex::handlers::{AppState, Dashboard};
use rust_spacex::routes::build_router;
use rust_spacex::services::DashboardService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize client and cache
    let spacex_client = SpaceXClient::new(&config.api)?;
    let cache = Cache::new(
        spacex_client,
        config.cache_policy.clone(),
        config.refresh_intervals.clone(),
    );

    // Initialize services
    let dashboard = Arc::new(DashboardService::new(cache));

    // Initialize application state
    let state = AppState {
        dashboard: dashboard.clone(),
    };

    // Start background tasks
    start_background_tasks(&config, dashboard);

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("rust_spacex service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Warm the collection keys; each key then refreshes on its own interval
fn start_background_tasks(config: &AppConfig, dashboard: Arc<Dashboard>) {
    let intervals = &config.refresh_intervals;
    info!(
        "Refresh intervals: launches {:?}, payloads {:?}, rockets {:?}, starlink {:?}",
        intervals.launches, intervals.payloads, intervals.rockets, intervals.starlink
    );

    let keys = [
        ResourceKey::Launches,
        ResourceKey::UpcomingLaunches,
        ResourceKey::PastLaunches,
        ResourceKey::Rockets,
        ResourceKey::Payloads,
        ResourceKey::Starlinks,
    ];

    for key in keys {
        let dashboard = dashboard.clone();
        tokio::spawn(async move {
            let state = dashboard.cache().get(&key).await;
            match (&state.data, &state.error) {
                (Some(data), _) => info!("Primed {} ({} records)", key.path(), data.len()),
                (None, Some(e)) => warn!("Priming {} failed: {}", key.path(), e),
                (None, None) => {}
            }
        });
    }

    info!("All background tasks started successfully");
}
