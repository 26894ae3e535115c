//! Application layer: command line, startup and the scan event loop

pub mod cli;
pub mod event_loop;
pub mod startup;
