use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use booking_flow_cell::models::{BookingFlowState, WizardState};
use catalog_cell::ClinicCatalog;
use login_cell::services::client::HttpLoginProvider;
use login_cell::services::prefill::ProfilePrefillService;
use shared_config::AppConfig;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic booking wizard API");

    // Load configuration
    let config = AppConfig::from_env();

    // One catalog and one wizard session for the lifetime of the process
    let catalog = Arc::new(ClinicCatalog::with_default_entries());
    let wizard = Arc::new(Mutex::new(WizardState::new()));
    let flow_state = Arc::new(BookingFlowState::new(
        Arc::clone(&catalog),
        Arc::clone(&wizard),
    ));

    // The login prefill runs once in the background. Early user edits may
    // race it; the last write wins.
    {
        let channel_id = config.login_channel_id.clone();
        let provider = HttpLoginProvider::new(&config);
        let wizard = Arc::clone(&wizard);
        tokio::spawn(async move {
            ProfilePrefillService::new(provider)
                .run(&channel_id, wizard)
                .await;
        });
    }

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(flow_state, catalog)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
