//! Command line interface: arguments and configuration

pub mod args;
pub mod config;

#[cfg(test)]
mod tests;
