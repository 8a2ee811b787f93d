pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::booking_flow_routes;
pub use services::controller::BookingFlowController;
pub use services::validation::FieldValidator;
