use tracing::{debug, info};

use catalog_cell::ClinicCatalog;
use shared_models::error::AppError;

use crate::models::{
    AppointmentSession, FieldEdit, FieldErrorSet, SessionField, Stage, WizardState,
};
use crate::services::validation::FieldValidator;

/// Drives the three-stage wizard: phone verification, form entry, success.
///
/// Every operation takes the wizard state by mutable reference and returns
/// the stage the wizard is in afterwards. Validation failures only populate
/// the error set; there is no error path the user cannot recover from by
/// re-editing and resubmitting.
pub struct BookingFlowController {
    validator: FieldValidator,
}

impl BookingFlowController {
    pub fn new() -> Self {
        Self {
            validator: FieldValidator::new(),
        }
    }

    /// `VerifyingPhone -> FillingForm` when the phone number has the right
    /// shape. On success the phone is stored and the error set cleared; on
    /// failure the stage does not change and a single phone error is set.
    pub fn verify_phone(&self, state: &mut WizardState, phone_number: &str) -> Stage {
        if state.stage != Stage::VerifyingPhone {
            debug!(stage = ?state.stage, "verify_phone ignored outside the verification stage");
            return state.stage;
        }

        if !self.validator.is_valid_phone_number(phone_number) {
            state.errors = FieldErrorSet::from([(
                SessionField::PhoneNumber,
                "phone number must start with 09 and be 10 digits".to_string(),
            )]);
            return state.stage;
        }

        state.errors.clear();
        state.session.phone_number = phone_number.to_string();
        state.stage = Stage::FillingForm;
        info!("phone number verified, entering form stage");
        state.stage
    }

    /// Applies one field edit to the session. Edits never change the stage
    /// and are not validated here. The identification number is uppercased
    /// on every edit; picks resolve the catalog entry by id.
    pub fn apply_edit(
        &self,
        state: &mut WizardState,
        catalog: &ClinicCatalog,
        edit: FieldEdit,
    ) -> Result<(), AppError> {
        match edit {
            FieldEdit::Date(value) => state.session.date = value,
            FieldEdit::Name(value) => state.session.name = value,
            FieldEdit::Birthday(value) => state.session.birthday = value,
            FieldEdit::IdNumber(value) => state.session.id_number = value.to_uppercase(),
            FieldEdit::Doctor(id) => {
                state.session.doctor = Some(
                    catalog
                        .doctor(id)
                        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", id)))?,
                );
            }
            FieldEdit::TimeSlot(id) => {
                state.session.time_slot = Some(catalog.time_slot(&id).ok_or_else(|| {
                    AppError::NotFound(format!("Time slot '{}' not found", id))
                })?);
            }
            FieldEdit::VisitType(id) => {
                state.session.visit_type = Some(catalog.visit_type(&id).ok_or_else(|| {
                    AppError::NotFound(format!("Visit type '{}' not found", id))
                })?);
            }
        }
        Ok(())
    }

    /// `FillingForm -> Success` when every field passes. The error set is
    /// recomputed in full so all failing fields are reported at once and no
    /// stale entry is carried over. Resubmitting an unchanged valid session
    /// from `Success` stays in `Success`.
    pub fn submit(&self, state: &mut WizardState) -> Stage {
        if state.stage == Stage::VerifyingPhone {
            debug!("submit ignored before phone verification");
            return state.stage;
        }

        state.errors = self.validate_session(&state.session);
        if state.errors.is_empty() {
            state.stage = Stage::Success;
            info!("appointment confirmed");
        } else {
            state.stage = Stage::FillingForm;
            debug!(invalid_fields = state.errors.len(), "submit rejected");
        }
        state.stage
    }

    /// `Success -> VerifyingPhone`, resetting the session. A linked login
    /// keeps its name and user id across the reset so the identity does not
    /// have to be re-linked.
    pub fn restart(&self, state: &mut WizardState) -> Stage {
        if state.stage != Stage::Success {
            debug!(stage = ?state.stage, "restart ignored before completion");
            return state.stage;
        }

        let mut fresh = AppointmentSession::empty();
        if state.login_linked {
            fresh.name = state.session.name.clone();
            fresh.login_user_id = state.session.login_user_id.clone();
        }
        state.session = fresh;
        state.errors.clear();
        state.stage = Stage::VerifyingPhone;
        info!("session restarted");
        state.stage
    }

    fn validate_session(&self, session: &AppointmentSession) -> FieldErrorSet {
        let mut errors = FieldErrorSet::new();

        if !self.validator.is_valid_calendar_date(&session.date) {
            errors.insert(
                SessionField::Date,
                "enter a valid date, e.g. 2023/10/25 or 2023/5/3".to_string(),
            );
        }
        if session.name.trim().is_empty() {
            errors.insert(SessionField::Name, "name is required".to_string());
        }
        if !self.validator.is_valid_calendar_date(&session.birthday) {
            errors.insert(
                SessionField::Birthday,
                "enter a valid date, e.g. 1990/05/01 or 1990/5/1".to_string(),
            );
        }
        if session.id_number.trim().is_empty() {
            errors.insert(SessionField::IdNumber, "id number is required".to_string());
        }
        if session.doctor.is_none() {
            errors.insert(SessionField::Doctor, "select a doctor".to_string());
        }
        if session.time_slot.is_none() {
            errors.insert(SessionField::TimeSlot, "select a time slot".to_string());
        }
        if session.visit_type.is_none() {
            errors.insert(SessionField::VisitType, "select a visit type".to_string());
        }

        errors
    }
}

impl Default for BookingFlowController {
    fn default() -> Self {
        Self::new()
    }
}
