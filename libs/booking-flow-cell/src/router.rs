use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers;
use crate::models::BookingFlowState;

pub fn booking_flow_routes(state: Arc<BookingFlowState>) -> Router {
    Router::new()
        .route("/", get(handlers::current_view))
        .route("/verify", post(handlers::verify_phone))
        .route("/fields", patch(handlers::edit_field))
        .route("/submit", post(handlers::submit))
        .route("/restart", post(handlers::restart))
        .with_state(state)
}
