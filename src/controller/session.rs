//! Wiring of controller, lookup backend and renderer

use crate::controller::scan_controller::ScanController;
use crate::controller::state::LookupTicket;
use crate::lookup::api::{LookupOutcome, ProductLookup};
use crate::presentation::api::{PresentationSink, Renderer};
use crate::scanner::api::{DeviceId, ScanOptions, ScanSignal, ScanSourceError, ScanSourceResult};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Banner text when a lookup aborts without producing a result
pub const LOOKUP_ABORTED: &str = "Lookup aborted unexpectedly";

/// A lookup that has finished, waiting to be applied to the display
#[derive(Debug, Clone, PartialEq)]
pub struct SettledLookup {
    pub ticket: LookupTicket,
    pub outcome: LookupOutcome,
}

/// An in-flight lookup; always resolves, even when the backend panics
pub type PendingLookup = BoxFuture<'static, SettledLookup>;

/// One scanning session
///
/// Gated codes start a lookup and show the loading indicator. The caller
/// drives the returned [`PendingLookup`]s and hands each result back to
/// [`settle`](Self::settle). Several lookups may be in flight; whichever
/// settles last owns the display.
pub struct LookupSession<P: PresentationSink> {
    controller: ScanController,
    renderer: Renderer<P>,
    lookup: Arc<dyn ProductLookup>,
}

impl<P: PresentationSink> LookupSession<P> {
    pub fn new(controller: ScanController, renderer: Renderer<P>, lookup: Arc<dyn ProductLookup>) -> Self {
        Self {
            controller,
            renderer,
            lookup,
        }
    }

    pub fn controller(&self) -> &ScanController {
        &self.controller
    }

    pub fn renderer(&self) -> &Renderer<P> {
        &self.renderer
    }

    pub fn into_renderer(self) -> Renderer<P> {
        self.renderer
    }

    /// Start the scan source, showing the matching banner when it is unavailable
    pub async fn start_scanning(
        &mut self,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<DeviceId> {
        match self.controller.start_scanning(options, signals).await {
            Ok(device) => Ok(device),
            Err(e) => {
                self.show_scanner_unavailable(&e);
                Err(e)
            }
        }
    }

    pub fn show_scanner_unavailable(&mut self, error: &ScanSourceError) {
        log::warn!("Scanner unavailable: {}", error);
        self.renderer.show_banner(error.banner_text());
    }

    pub fn on_detected(&mut self, code: &str) -> Option<PendingLookup> {
        let ticket = self.controller.on_detected(code)?;
        Some(self.begin(ticket))
    }

    pub fn on_manual_submit(&mut self, code: &str) -> Option<PendingLookup> {
        let ticket = self.controller.on_manual_submit(code)?;
        Some(self.begin(ticket))
    }

    pub fn on_detection_noise(&self, reason: &str) {
        self.controller.on_detection_noise(reason);
    }

    /// Apply a finished lookup to the display and the scan gate
    pub fn settle(&mut self, settled: SettledLookup) {
        let SettledLookup { ticket, outcome } = settled;
        log::debug!(
            "Lookup #{} for '{}' settled: {}",
            ticket.id,
            ticket.code,
            if outcome.is_success() { "success" } else { "failure" }
        );
        self.renderer.finish_loading();
        self.renderer.render_outcome(&outcome);
        self.controller.on_lookup_settled(&ticket, &outcome);
    }

    /// Await a pending lookup, settle it and return its outcome
    pub async fn complete(&mut self, pending: PendingLookup) -> LookupOutcome {
        let settled = pending.await;
        let outcome = settled.outcome.clone();
        self.settle(settled);
        outcome
    }

    fn begin(&mut self, ticket: LookupTicket) -> PendingLookup {
        log::info!(
            "Looking up '{}' (#{}, {:?}) via {}",
            ticket.code,
            ticket.id,
            ticket.origin,
            self.lookup.name()
        );
        self.renderer.begin_loading();

        let lookup = Arc::clone(&self.lookup);
        async move {
            let code = ticket.code.clone();
            let outcome = match AssertUnwindSafe(async move { lookup.lookup(&code).await })
                .catch_unwind()
                .await
            {
                Ok(result) => LookupOutcome::from(result),
                Err(_) => {
                    log::error!("Lookup #{} panicked", ticket.id);
                    LookupOutcome::Failure(LOOKUP_ABORTED.to_string())
                }
            };
            SettledLookup { ticket, outcome }
        }
        .boxed()
    }
}
