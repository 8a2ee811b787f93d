pub mod error;
pub mod models;
pub mod services;

pub use error::LoginError;
pub use models::LoginProfile;
pub use services::client::{HttpLoginProvider, LoginProvider};
pub use services::prefill::ProfilePrefillService;
