pub mod locale;
pub mod request;
pub mod result;

pub use locale::Lang;
pub use request::{ScanMode, ScanRequest};
pub use result::{ScanResult, Verdict};
