//! In-memory display surface

use crate::presentation::card::ProductCard;
use crate::presentation::renderer::{PresentationSink, Visibility};

/// One call received by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Loading(bool),
    CardVisible(bool),
    Error(Option<String>),
    CardRendered(String),
}

/// Sink that keeps the current display state and every call it received
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub loading: bool,
    pub card_visible: bool,
    pub error: Option<String>,
    pub card: Option<ProductCard>,
    pub events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            loading: self.loading,
            card: self.card_visible,
            error: self.error.is_some(),
        }
    }

    /// The card as currently shown, if it is visible
    pub fn displayed_card(&self) -> Option<&ProductCard> {
        self.card.as_ref().filter(|_| self.card_visible)
    }
}

impl PresentationSink for MemorySink {
    fn set_loading_visible(&mut self, visible: bool) {
        self.loading = visible;
        self.events.push(SinkEvent::Loading(visible));
    }

    fn set_card_visible(&mut self, visible: bool) {
        self.card_visible = visible;
        self.events.push(SinkEvent::CardVisible(visible));
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
        self.events.push(SinkEvent::Error(self.error.clone()));
    }

    fn render_card(&mut self, card: &ProductCard) {
        self.card = Some(card.clone());
        self.events.push(SinkEvent::CardRendered(card.name.clone()));
    }
}
