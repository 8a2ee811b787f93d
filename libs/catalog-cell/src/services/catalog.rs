use std::sync::Arc;

use crate::models::{Doctor, TimeSlot, VisitType};

/// Read-only reference data offered as choices in the booking form.
///
/// Entries are loaded once at startup and handed out as `Arc` references, so
/// a selection in the session always points at the catalog entry instead of
/// carrying a copy.
#[derive(Debug, Clone)]
pub struct ClinicCatalog {
    doctors: Vec<Arc<Doctor>>,
    time_slots: Vec<Arc<TimeSlot>>,
    visit_types: Vec<Arc<VisitType>>,
}

impl ClinicCatalog {
    pub fn new(
        doctors: Vec<Doctor>,
        time_slots: Vec<TimeSlot>,
        visit_types: Vec<VisitType>,
    ) -> Self {
        Self {
            doctors: doctors.into_iter().map(Arc::new).collect(),
            time_slots: time_slots.into_iter().map(Arc::new).collect(),
            visit_types: visit_types.into_iter().map(Arc::new).collect(),
        }
    }

    /// The choices the clinic currently offers.
    pub fn with_default_entries() -> Self {
        Self::new(
            vec![
                Doctor {
                    id: 1,
                    name: "Dr. Alice Hong".to_string(),
                    specialty: "Family Medicine".to_string(),
                    image_url: "/assets/doctors/hong.jpg".to_string(),
                },
                Doctor {
                    id: 2,
                    name: "Dr. Peter Chao".to_string(),
                    specialty: "Internal Medicine".to_string(),
                    image_url: "/assets/doctors/chao.jpg".to_string(),
                },
                Doctor {
                    id: 3,
                    name: "Dr. Mei Lin".to_string(),
                    specialty: "Pediatrics".to_string(),
                    image_url: "/assets/doctors/lin.jpg".to_string(),
                },
            ],
            vec![
                TimeSlot {
                    id: "morning".to_string(),
                    label: "Morning 09:00 - 12:00".to_string(),
                },
                TimeSlot {
                    id: "afternoon".to_string(),
                    label: "Afternoon 14:00 - 17:30".to_string(),
                },
                TimeSlot {
                    id: "evening".to_string(),
                    label: "Evening 18:30 - 21:00".to_string(),
                },
            ],
            vec![
                VisitType {
                    id: "general".to_string(),
                    label: "General consultation".to_string(),
                    deduction: "deducts 10 minutes".to_string(),
                },
                VisitType {
                    id: "followup".to_string(),
                    label: "Follow-up visit".to_string(),
                    deduction: "deducts 5 minutes".to_string(),
                },
                VisitType {
                    id: "report".to_string(),
                    label: "Report review".to_string(),
                    deduction: "deducts 5 minutes".to_string(),
                },
            ],
        )
    }

    pub fn doctors(&self) -> &[Arc<Doctor>] {
        &self.doctors
    }

    pub fn time_slots(&self) -> &[Arc<TimeSlot>] {
        &self.time_slots
    }

    pub fn visit_types(&self) -> &[Arc<VisitType>] {
        &self.visit_types
    }

    pub fn doctor(&self, id: u32) -> Option<Arc<Doctor>> {
        self.doctors.iter().find(|d| d.id == id).cloned()
    }

    pub fn time_slot(&self, id: &str) -> Option<Arc<TimeSlot>> {
        self.time_slots.iter().find(|s| s.id == id).cloned()
    }

    pub fn visit_type(&self, id: &str) -> Option<Arc<VisitType>> {
        self.visit_types.iter().find(|v| v.id == id).cloned()
    }
}
