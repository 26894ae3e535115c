//! Gate between the scan source and the lookup pipeline

use crate::controller::state::{LookupTicket, ScanState, TriggerOrigin};
use crate::lookup::api::LookupOutcome;
use crate::scanner::api::{DeviceId, ScanOptions, ScanSignal, ScanSource, ScanSourceError, ScanSourceResult};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Owns the scan gate and decides which codes start a lookup
///
/// Scanner detections are serialised: once one passes the gate, further
/// detections are discarded until a lookup fails. Manual submissions bypass
/// the gate but close it.
pub struct ScanController {
    state: ScanState,
    source: Arc<dyn ScanSource>,
    last_ticket: u64,
}

impl ScanController {
    pub fn new(source: Arc<dyn ScanSource>) -> Self {
        Self {
            state: ScanState::default(),
            source,
            last_ticket: 0,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.state.is_scanning()
    }

    /// Enumerate devices and start the source on the first one
    pub async fn start_scanning(
        &self,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<DeviceId> {
        let devices = self.source.enumerate_devices().await?;
        let device = devices
            .into_iter()
            .next()
            .ok_or(ScanSourceError::NoDevice)?;
        self.source.start(&device, options, signals).await?;
        log::info!("Scanning on {}", device);
        Ok(device)
    }

    /// A code was detected by the scan source
    pub fn on_detected(&mut self, code: &str) -> Option<LookupTicket> {
        if !self.state.is_scanning() {
            log::debug!("Discarding detection '{}' while a lookup is pending", code);
            return None;
        }
        self.state.close();
        self.source.pause();
        Some(self.issue(code, TriggerOrigin::Detection))
    }

    /// The user submitted a code by hand
    pub fn on_manual_submit(&mut self, code: &str) -> Option<LookupTicket> {
        if code.is_empty() {
            return None;
        }
        self.state.close();
        Some(self.issue(code, TriggerOrigin::Manual))
    }

    /// Detection noise is expected continuously and never acted upon
    pub fn on_detection_noise(&self, reason: &str) {
        log::trace!("Scan noise: {}", reason);
    }

    /// A lookup finished; failures reopen the gate and resume the source
    pub fn on_lookup_settled(&mut self, ticket: &LookupTicket, outcome: &LookupOutcome) {
        match outcome {
            LookupOutcome::Success(_) => {
                log::debug!("Lookup #{} succeeded; scanning stays paused", ticket.id);
            }
            LookupOutcome::Failure(_) => {
                self.state.open();
                if let Err(e) = self.source.resume() {
                    log::debug!("Ignoring resume failure after lookup #{}: {}", ticket.id, e);
                }
            }
        }
    }

    fn issue(&mut self, code: &str, origin: TriggerOrigin) -> LookupTicket {
        self.last_ticket += 1;
        LookupTicket {
            id: self.last_ticket,
            code: code.to_string(),
            origin,
        }
    }
}
