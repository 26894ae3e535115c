//! Scan gate state and lookup tickets

/// Whether scanner detections may start a lookup
///
/// Starts open. Closed by every gated detection and every manual submission;
/// reopened only by a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    is_scanning: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self { is_scanning: true }
    }
}

impl ScanState {
    pub fn is_scanning(&self) -> bool {
        self.is_scanning
    }

    pub(crate) fn close(&mut self) {
        self.is_scanning = false;
    }

    pub(crate) fn open(&mut self) {
        self.is_scanning = true;
    }
}

/// Where a lookup request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOrigin {
    Detection,
    Manual,
}

/// Handle of one started lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    /// Monotonic per controller, starting at 1
    pub id: u64,
    pub code: String,
    pub origin: TriggerOrigin,
}
