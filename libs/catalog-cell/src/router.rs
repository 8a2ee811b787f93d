use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::catalog::ClinicCatalog;

pub fn catalog_routes(state: Arc<ClinicCatalog>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .route("/time-slots", get(handlers::list_time_slots))
        .route("/visit-types", get(handlers::list_visit_types))
        .with_state(state)
}
