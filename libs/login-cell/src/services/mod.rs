pub mod client;
pub mod prefill;
