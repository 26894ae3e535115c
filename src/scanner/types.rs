//! Scan source types

use std::fmt;

/// Identifier of a scanning device as reported by enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(pub String);

impl DeviceId {
    /// Device id that reads codes from standard input
    pub const STDIN: &'static str = "-";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_stdin(&self) -> bool {
        self.0 == Self::STDIN
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stdin() {
            write!(f, "<stdin>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Area of the frame the decoder looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionRegion {
    pub width: u32,
    pub height: u32,
}

/// Options passed to [`ScanSource::start`](super::source::ScanSource::start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum detections per second
    pub fps: u32,
    pub detection_region: DetectionRegion,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            fps: 10,
            detection_region: DetectionRegion {
                width: 250,
                height: 100,
            },
        }
    }
}

impl ScanOptions {
    /// Minimum spacing between two detections
    pub fn min_detection_interval(&self) -> Option<std::time::Duration> {
        if self.fps == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs_f64(1.0 / f64::from(self.fps)))
        }
    }
}

/// Signal emitted by a running scan source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSignal {
    /// A code was decoded
    Detected(String),
    /// A frame produced nothing usable; expected during normal operation
    Noise(String),
}

/// Lifecycle of a scan source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SourceState {
    Idle = 0,
    Running = 1,
    Paused = 2,
    Stopped = 3,
}

impl SourceState {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => SourceState::Running,
            2 => SourceState::Paused,
            3 => SourceState::Stopped,
            _ => SourceState::Idle,
        }
    }
}

impl fmt::Display for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceState::Idle => "idle",
            SourceState::Running => "running",
            SourceState::Paused => "paused",
            SourceState::Stopped => "stopped",
        };
        write!(f, "{name}")
    }
}
