//! Scan control
//!
//! [`scan_controller::ScanController`] owns the `is_scanning` gate;
//! [`session::LookupSession`] connects it to a lookup backend and a renderer.

pub(crate) mod scan_controller;
pub(crate) mod session;
pub(crate) mod state;

pub mod api;

#[cfg(test)]
mod tests;
