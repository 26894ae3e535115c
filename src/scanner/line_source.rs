//! Scan source reading newline-terminated codes
//!
//! Keyboard-wedge and serial barcode readers deliver one code per line. The
//! source reads such a stream from a device node, FIFO or stdin and turns
//! each line into a [`ScanSignal`].

use crate::scanner::error::{ScanSourceError, ScanSourceResult};
use crate::scanner::source::ScanSource;
use crate::scanner::types::{DeviceId, ScanOptions, ScanSignal, SourceState};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

type BoxedReader = Box<dyn AsyncRead + Unpin + Send>;

/// Scan source backed by a line-oriented reader
pub struct LineScanSource {
    candidates: Vec<PathBuf>,
    state: Arc<AtomicU8>,
}

impl LineScanSource {
    /// Create a source that may start on any of `candidates`
    ///
    /// A candidate of `-` stands for standard input.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            state: Arc::new(AtomicU8::new(SourceState::Idle as u8)),
        }
    }

    pub fn state(&self) -> SourceState {
        SourceState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Start reading from an already opened reader
    ///
    /// Used by [`ScanSource::start`] once the device is open, and directly by
    /// callers that own their own stream.
    pub fn start_reader<R>(
        &self,
        device: &DeviceId,
        reader: R,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<()>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        self.state
            .compare_exchange(
                SourceState::Idle as u8,
                SourceState::Running as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map_err(|_| ScanSourceError::AlreadyStarted {
                device: device.to_string(),
            })?;

        log::debug!(
            "Scanning {} at up to {} fps (region {}x{})",
            device,
            options.fps,
            options.detection_region.width,
            options.detection_region.height
        );

        let state = Arc::clone(&self.state);
        let device = device.clone();
        tokio::spawn(async move {
            read_lines(BufReader::new(reader), state, options, signals).await;
            log::debug!("Scan source {} exhausted", device);
        });
        Ok(())
    }

    async fn open(device: &DeviceId) -> ScanSourceResult<BoxedReader> {
        if device.is_stdin() {
            return Ok(Box::new(tokio::io::stdin()));
        }
        let file = tokio::fs::File::open(device.as_str())
            .await
            .map_err(|e| ScanSourceError::from_open_error(device.as_str(), &e))?;
        Ok(Box::new(file))
    }
}

async fn read_lines<R>(
    reader: BufReader<R>,
    state: Arc<AtomicU8>,
    options: ScanOptions,
    signals: UnboundedSender<ScanSignal>,
) where
    R: AsyncRead + Unpin,
{
    let min_interval = options.min_detection_interval();
    let mut last_detection: Option<Instant> = None;
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::warn!("Scan source read failed: {}", e);
                break;
            }
        };

        let code = line.trim();
        let signal = if code.is_empty() {
            ScanSignal::Noise("empty read".to_string())
        } else if SourceState::from_u8(state.load(Ordering::SeqCst)) == SourceState::Paused {
            ScanSignal::Noise("paused".to_string())
        } else if matches!(
            (last_detection, min_interval),
            (Some(last), Some(interval)) if last.elapsed() < interval
        ) {
            ScanSignal::Noise("rate limited".to_string())
        } else {
            last_detection = Some(Instant::now());
            ScanSignal::Detected(code.to_string())
        };

        if signals.send(signal).is_err() {
            break;
        }
    }

    state.store(SourceState::Stopped as u8, Ordering::SeqCst);
}

#[async_trait]
impl ScanSource for LineScanSource {
    async fn enumerate_devices(&self) -> ScanSourceResult<Vec<DeviceId>> {
        let mut devices = Vec::new();
        for candidate in &self.candidates {
            let id = DeviceId::new(candidate.to_string_lossy());
            if id.is_stdin() {
                devices.push(id);
                continue;
            }
            match tokio::fs::metadata(candidate).await {
                Ok(_) => devices.push(id),
                Err(e) => log::debug!("Skipping scan device {}: {}", candidate.display(), e),
            }
        }
        Ok(devices)
    }

    async fn start(
        &self,
        device: &DeviceId,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<()> {
        if self.state() != SourceState::Idle {
            return Err(ScanSourceError::AlreadyStarted {
                device: device.to_string(),
            });
        }
        let reader = Self::open(device).await?;
        self.start_reader(device, reader, options, signals)
    }

    fn pause(&self) {
        let paused = self.state.compare_exchange(
            SourceState::Running as u8,
            SourceState::Paused as u8,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        if let Err(current) = paused {
            log::trace!(
                "Pause ignored while scan source is {}",
                SourceState::from_u8(current)
            );
        }
    }

    fn resume(&self) -> ScanSourceResult<()> {
        self.state
            .compare_exchange(
                SourceState::Paused as u8,
                SourceState::Running as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(|current| ScanSourceError::NotPausable {
                state: SourceState::from_u8(current).to_string(),
            })
    }
}
