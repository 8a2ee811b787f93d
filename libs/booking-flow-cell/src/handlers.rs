use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{BookingFlowState, FieldEdit, Stage, VerifyPhoneRequest, WizardView};

pub async fn current_view(State(state): State<Arc<BookingFlowState>>) -> Json<WizardView> {
    let wizard = state.wizard.lock().await;
    Json(WizardView::from_state(&wizard, false))
}

pub async fn verify_phone(
    State(state): State<Arc<BookingFlowState>>,
    Json(request): Json<VerifyPhoneRequest>,
) -> Json<WizardView> {
    debug!("Verifying phone number");
    let mut wizard = state.wizard.lock().await;
    state
        .controller
        .verify_phone(&mut wizard, &request.phone_number);
    Json(WizardView::from_state(&wizard, false))
}

pub async fn edit_field(
    State(state): State<Arc<BookingFlowState>>,
    Json(edit): Json<FieldEdit>,
) -> Result<Json<WizardView>, AppError> {
    let mut wizard = state.wizard.lock().await;
    state.controller.apply_edit(&mut wizard, &state.catalog, edit)?;
    Ok(Json(WizardView::from_state(&wizard, false)))
}

pub async fn submit(State(state): State<Arc<BookingFlowState>>) -> Json<WizardView> {
    debug!("Submitting appointment form");
    let mut wizard = state.wizard.lock().await;
    let stage = state.controller.submit(&mut wizard);
    let scroll_to_top = stage == Stage::FillingForm && !wizard.errors.is_empty();
    Json(WizardView::from_state(&wizard, scroll_to_top))
}

pub async fn restart(State(state): State<Arc<BookingFlowState>>) -> Json<WizardView> {
    debug!("Restarting booking session");
    let mut wizard = state.wizard.lock().await;
    state.controller.restart(&mut wizard);
    Json(WizardView::from_state(&wizard, false))
}
