//! Controller API
//!
//! Public surface of the scan gate and the lookup session.

pub use crate::controller::scan_controller::ScanController;
pub use crate::controller::session::{LookupSession, PendingLookup, SettledLookup, LOOKUP_ABORTED};
pub use crate::controller::state::{LookupTicket, ScanState, TriggerOrigin};
