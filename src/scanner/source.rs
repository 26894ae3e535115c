//! The scan source boundary

use crate::scanner::error::ScanSourceResult;
use crate::scanner::types::{DeviceId, ScanOptions, ScanSignal};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

/// A capability that decodes codes and reports them as [`ScanSignal`]s
#[async_trait]
pub trait ScanSource: Send + Sync {
    /// List the devices this source can start on
    async fn enumerate_devices(&self) -> ScanSourceResult<Vec<DeviceId>>;

    /// Begin producing signals on `signals`
    ///
    /// Fails when the device is missing or cannot be opened. Signals keep
    /// flowing until the device is exhausted or the receiver is dropped.
    async fn start(
        &self,
        device: &DeviceId,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<()>;

    /// Stop reporting detections until [`resume`](Self::resume)
    fn pause(&self);

    /// Resume after a pause; fails when the source is not paused
    fn resume(&self) -> ScanSourceResult<()>;
}
