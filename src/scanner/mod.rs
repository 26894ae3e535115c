//! Scan source
//!
//! The boundary to whatever decodes codes: a [`source::ScanSource`] reports
//! detections and noise and can be paused and resumed. [`line_source`]
//! provides the implementation for line-oriented barcode readers.

pub(crate) mod error;
pub(crate) mod line_source;
pub(crate) mod source;
pub(crate) mod types;

pub mod api;

#[cfg(test)]
mod tests;
