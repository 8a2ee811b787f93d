use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use catalog_cell::models::{Doctor, TimeSlot, VisitType};
use catalog_cell::ClinicCatalog;

use crate::services::controller::BookingFlowController;

/// The three screens the user progresses through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    VerifyingPhone,
    FillingForm,
    Success,
}

/// Session fields addressable by the error set and field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionField {
    PhoneNumber,
    Date,
    Name,
    Birthday,
    IdNumber,
    Doctor,
    TimeSlot,
    VisitType,
}

/// One message per currently-invalid field; recomputed in full on every
/// validation attempt so no stale entry survives a resubmission.
pub type FieldErrorSet = HashMap<SessionField, String>;

/// Everything the user has entered or selected so far. Selections hold the
/// catalog entry by reference, never a copy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentSession {
    pub phone_number: String,
    pub date: String,
    pub name: String,
    pub birthday: String,
    pub id_number: String,
    pub doctor: Option<Arc<Doctor>>,
    pub time_slot: Option<Arc<TimeSlot>>,
    pub visit_type: Option<Arc<VisitType>>,
    pub login_user_id: Option<String>,
}

impl AppointmentSession {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The single mutable aggregate of the wizard.
#[derive(Debug)]
pub struct WizardState {
    pub stage: Stage,
    pub session: AppointmentSession,
    pub errors: FieldErrorSet,
    /// Set once by the login prefill when an active platform login was found.
    pub login_linked: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            stage: Stage::VerifyingPhone,
            session: AppointmentSession::empty(),
            errors: FieldErrorSet::new(),
            login_linked: false,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedWizard = Arc<Mutex<WizardState>>;

/// Router state for the wizard endpoints.
pub struct BookingFlowState {
    pub controller: BookingFlowController,
    pub catalog: Arc<ClinicCatalog>,
    pub wizard: SharedWizard,
}

impl BookingFlowState {
    pub fn new(catalog: Arc<ClinicCatalog>, wizard: SharedWizard) -> Self {
        Self {
            controller: BookingFlowController::new(),
            catalog,
            wizard,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VerifyPhoneRequest {
    pub phone_number: String,
}

/// A single field edit. Edits never change the stage and are not validated;
/// validation is deferred to submit.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    Date(String),
    Name(String),
    Birthday(String),
    IdNumber(String),
    Doctor(u32),
    TimeSlot(String),
    VisitType(String),
}

/// What the embedded web view renders after every operation.
#[derive(Debug, Serialize)]
pub struct WizardView {
    pub stage: Stage,
    pub session: AppointmentSession,
    pub errors: FieldErrorSet,
    pub phone_verified: bool,
    pub login_linked: bool,
    /// True only after a failed submit, so the view can bring the error
    /// messages back into sight.
    pub scroll_to_top: bool,
}

impl WizardView {
    pub fn from_state(state: &WizardState, scroll_to_top: bool) -> Self {
        Self {
            stage: state.stage,
            session: state.session.clone(),
            errors: state.errors.clone(),
            phone_verified: !state.session.phone_number.is_empty(),
            login_linked: state.login_linked,
            scroll_to_top,
        }
    }
}
