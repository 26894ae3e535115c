//! Scanner API
//!
//! Public surface of the scan source subsystem.

pub use crate::scanner::error::{ScanSourceError, ScanSourceResult};
pub use crate::scanner::line_source::LineScanSource;
pub use crate::scanner::source::ScanSource;
pub use crate::scanner::types::{DetectionRegion, DeviceId, ScanOptions, ScanSignal, SourceState};
