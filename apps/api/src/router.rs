use std::sync::Arc;

use axum::{routing::get, Router};

use booking_flow_cell::models::BookingFlowState;
use booking_flow_cell::router::booking_flow_routes;
use catalog_cell::router::catalog_routes;
use catalog_cell::ClinicCatalog;

pub fn create_router(flow_state: Arc<BookingFlowState>, catalog: Arc<ClinicCatalog>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking wizard API is running!" }))
        .nest("/booking", booking_flow_routes(flow_state))
        .nest("/catalog", catalog_routes(catalog))
}
