//! The scan event loop
//!
//! Multiplexes scanner signals, typed codes and settling lookups onto one
//! [`LookupSession`]. Everything runs on the current task, so the session
//! needs no locking.

use crate::controller::api::LookupSession;
use crate::presentation::api::PresentationSink;
use crate::scanner::api::ScanSignal;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Why the loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// All inputs closed and every lookup settled
    Drained,
    /// The shutdown future completed first
    Interrupted,
}

/// Run until every input is closed and all lookups have settled, or until `shutdown`
///
/// Lookups still in flight at shutdown are dropped without rendering.
pub async fn run_scan_loop<P, S>(
    session: &mut LookupSession<P>,
    mut signals: UnboundedReceiver<ScanSignal>,
    mut manual: UnboundedReceiver<String>,
    shutdown: S,
) -> LoopExit
where
    P: PresentationSink,
    S: Future<Output = ()>,
{
    let mut in_flight = FuturesUnordered::new();
    let mut signals_open = true;
    let mut manual_open = true;
    tokio::pin!(shutdown);

    loop {
        if !signals_open && !manual_open && in_flight.is_empty() {
            return LoopExit::Drained;
        }

        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Shutting down with {} lookup(s) in flight", in_flight.len());
                return LoopExit::Interrupted;
            }
            signal = signals.recv(), if signals_open => match signal {
                Some(ScanSignal::Detected(code)) => {
                    if let Some(pending) = session.on_detected(&code) {
                        in_flight.push(pending);
                    }
                }
                Some(ScanSignal::Noise(reason)) => session.on_detection_noise(&reason),
                None => {
                    log::debug!("Scan source closed");
                    signals_open = false;
                }
            },
            line = manual.recv(), if manual_open => match line {
                Some(code) => {
                    if let Some(pending) = session.on_manual_submit(&code) {
                        in_flight.push(pending);
                    }
                }
                None => {
                    log::debug!("Manual input closed");
                    manual_open = false;
                }
            },
            Some(settled) = in_flight.next(), if !in_flight.is_empty() => session.settle(settled),
        }
    }
}

/// Forward trimmed lines from stdin as manual submissions
///
/// Not used when the scanner itself reads stdin.
pub fn spawn_manual_input(codes: UnboundedSender<String>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if codes.send(line.trim().to_string()).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Reading manual input failed: {}", e);
                    break;
                }
            }
        }
    });
}

/// Resolves on Ctrl-C; never resolves when the handler cannot be installed
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
