use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{Doctor, TimeSlot, VisitType};
use crate::services::catalog::ClinicCatalog;

pub async fn list_doctors(
    State(catalog): State<Arc<ClinicCatalog>>,
) -> Json<Vec<Arc<Doctor>>> {
    debug!("Listing doctors");
    Json(catalog.doctors().to_vec())
}

pub async fn get_doctor(
    State(catalog): State<Arc<ClinicCatalog>>,
    Path(doctor_id): Path<u32>,
) -> Result<Json<Arc<Doctor>>, AppError> {
    catalog
        .doctor(doctor_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))
}

pub async fn list_time_slots(
    State(catalog): State<Arc<ClinicCatalog>>,
) -> Json<Vec<Arc<TimeSlot>>> {
    debug!("Listing time slots");
    Json(catalog.time_slots().to_vec())
}

pub async fn list_visit_types(
    State(catalog): State<Arc<ClinicCatalog>>,
) -> Json<Vec<Arc<VisitType>>> {
    debug!("Listing visit types");
    Json(catalog.visit_types().to_vec())
}
