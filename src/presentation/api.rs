//! Presentation API
//!
//! Public surface of the renderer, the score mapper and the shipped sinks.

pub use crate::presentation::card::{
    PillList, ProductCard, VegBadge, VegStyle, NONE_DETECTED, PLACEHOLDER_IMAGE,
};
pub use crate::presentation::renderer::{Phase, PresentationSink, Renderer, Visibility};
pub use crate::presentation::score::{
    NutriGrade, ScoreIndicator, DEFAULT_LABEL_COLOR, MARKER_BORDER_COLOR, OFF_SCALE_POSITION,
};
pub use crate::presentation::sinks::json::JsonSink;
pub use crate::presentation::sinks::memory::{MemorySink, SinkEvent};
pub use crate::presentation::sinks::terminal::{format_card, TerminalSink};
