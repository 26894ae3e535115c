//! JSON lines output, one object per display transition

use crate::presentation::card::ProductCard;
use crate::presentation::renderer::PresentationSink;
use serde_json::json;
use std::io::Write;

pub struct JsonSink<W: Write + Send> {
    out: W,
    card: Option<ProductCard>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, card: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: serde_json::Value) {
        let written = writeln!(self.out, "{}", value).and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::warn!("Failed to write JSON output: {}", e);
        }
    }
}

impl<W: Write + Send> PresentationSink for JsonSink<W> {
    fn set_loading_visible(&mut self, visible: bool) {
        self.emit(json!({ "event": "loading", "visible": visible }));
    }

    fn set_card_visible(&mut self, visible: bool) {
        let value = match self.card.as_ref().filter(|_| visible) {
            Some(card) => json!({ "event": "card", "visible": true, "card": card }),
            None => json!({ "event": "card", "visible": false }),
        };
        self.emit(value);
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.emit(json!({ "event": "error", "message": message }));
    }

    fn render_card(&mut self, card: &ProductCard) {
        self.card = Some(card.clone());
    }
}
