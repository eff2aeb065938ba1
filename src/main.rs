use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_leads_api::config::Config;
use event_leads_api::handlers::{self, AppState};
use event_leads_api::supabase::SupabaseClient;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, constructs the Supabase client
/// once for the process lifetime, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_leads_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the Supabase client once; shared by reference across requests
    let supabase = SupabaseClient::new(
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase client: {}", e))?;
    tracing::info!("Supabase client initialized: {}", config.supabase_url);

    let port = config.port;

    // Build application state
    let app_state = Arc::new(AppState { config, supabase });

    // Lead intake route; a small body limit is plenty for a contact form
    let lead_routes = Router::new()
        .route("/api/event-lead", any(handlers::capture_lead))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(64 * 1024)));

    // Build final app with health check outside the body limit
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(lead_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
