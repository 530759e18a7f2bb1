pub mod api;
pub mod config;
pub mod error;

pub use api::ScanApiClient;
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::ClientError;
