// Harness CCM Perspectives Fetcher - Library
// Lists the cost perspectives of an account and fetches detail for each

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;

// Re-export commonly used types
pub use models::{Perspective, PerspectiveListResponse};

pub use client::HarnessClient;
pub use config::Credentials;
pub use error::ClientError;
pub use runner::{RunSummary, Runner};

// Constants
pub const API_BASE_URL: &str = "https://app.harness.io";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_PAGE_NO: u32 = 0;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
