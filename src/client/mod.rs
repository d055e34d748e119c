// Client module - Harness CCM API client
pub mod api;

pub use api::HarnessClient;
