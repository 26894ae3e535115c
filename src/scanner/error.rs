//! Scan source error types

use thiserror::Error;

/// Errors raised by a scan source
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScanSourceError {
    /// No usable scanning device exists
    #[error("No camera found.")]
    NoDevice,

    /// The device exists but could not be opened
    #[error("Camera permission denied or error.")]
    PermissionDenied { device: String, reason: String },

    /// `resume` called while the source is not paused
    #[error("Scan source cannot resume while {state}")]
    NotPausable { state: String },

    /// `start` called on a source that is already producing detections
    #[error("Scan source already started on {device}")]
    AlreadyStarted { device: String },

    /// Any other IO failure while opening the device
    #[error("IO error on {device}: {reason}")]
    Io { device: String, reason: String },
}

impl crate::core::error_handling::ContextualError for ScanSourceError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            ScanSourceError::NoDevice | ScanSourceError::PermissionDenied { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ScanSourceError::NoDevice => Some("No camera found."),
            ScanSourceError::PermissionDenied { .. } => Some("Camera permission denied or error."),
            _ => None,
        }
    }
}

impl ScanSourceError {
    /// Map an IO error from opening `device` onto the scan source taxonomy
    ///
    /// The device was enumerated already, so even a vanished device is a
    /// start failure rather than [`ScanSourceError::NoDevice`].
    pub fn from_open_error(device: &str, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => ScanSourceError::PermissionDenied {
                device: device.to_string(),
                reason: error.to_string(),
            },
            _ => ScanSourceError::Io {
                device: device.to_string(),
                reason: error.to_string(),
            },
        }
    }

    /// Text shown on the persistent banner when scanning cannot begin
    ///
    /// Enumeration problems read "No camera found."; anything that goes wrong
    /// while starting an existing device reads as a permission problem.
    pub fn banner_text(&self) -> &'static str {
        match self {
            ScanSourceError::NoDevice => "No camera found.",
            _ => "Camera permission denied or error.",
        }
    }
}

/// Result type for scan source operations
pub type ScanSourceResult<T> = Result<T, ScanSourceError>;
