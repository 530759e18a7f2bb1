pub mod builder;
pub mod controller;

pub use builder::{normalize_paths, timeout_secs, BuildError, ScanForm};
pub use controller::{ScanController, ScanOutcome, ScanState};
