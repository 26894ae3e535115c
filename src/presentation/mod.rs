//! Presentation
//!
//! Deterministic mapping from lookup progress and outcomes to what a display
//! shows: loading indicator, error banner and product card. Drawing is left
//! to a [`renderer::PresentationSink`].

pub(crate) mod card;
pub(crate) mod renderer;
pub(crate) mod score;
pub(crate) mod sinks;

pub mod api;

#[cfg(test)]
mod tests;
