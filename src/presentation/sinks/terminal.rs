//! Coloured text output for interactive terminals

use crate::core::styles::{paint_hex, StyleRole};
use crate::presentation::card::{PillList, ProductCard, VegStyle};
use crate::presentation::renderer::PresentationSink;
use crate::presentation::score::{NutriGrade, ScoreIndicator};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Cells used by the Nutri-Score bar
const SCALE_WIDTH: usize = 20;

/// Pills wrap once a row would exceed this many cells
const PILL_ROW_WIDTH: usize = 56;

const LABELS: [&str; 6] = [
    "Category",
    "Image",
    "Diet",
    "Nutri-Score",
    "Allergens",
    "Additives",
];

pub struct TerminalSink<W: Write + Send> {
    out: W,
    color: bool,
    card: Option<ProductCard>,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            card: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            let line = StyleRole::Dim.paint("Looking up product...", self.color);
            self.emit(&line);
        }
    }

    fn set_card_visible(&mut self, visible: bool) {
        if !visible {
            return;
        }
        if let Some(card) = self.card.take() {
            let text = format_card(&card, self.color);
            self.emit(&text);
        }
    }

    fn show_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            let line = format!("{} {}", StyleRole::Error.paint("✗", self.color), message);
            self.emit(&line);
        }
    }

    fn render_card(&mut self, card: &ProductCard) {
        self.card = Some(card.clone());
    }
}

/// Render a product card as text
pub fn format_card(card: &ProductCard, color: bool) -> String {
    let label_width = LABELS.iter().map(|l| l.width()).max().unwrap_or(0) + 2;
    let row = |label: &str, value: &str| -> String {
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        format!("  {}{}{}", StyleRole::Key.paint(label, color), padding, value)
    };
    let indent = " ".repeat(label_width + 2);

    let veg_role = match card.veg.style {
        VegStyle::Green => StyleRole::VegGreen,
        VegStyle::Red => StyleRole::VegRed,
        VegStyle::Unknown => StyleRole::VegUnknown,
    };

    let mut lines = vec![
        StyleRole::Header.paint(&card.name, color),
        row("Category", &card.category_line),
        row("Image", &StyleRole::Dim.paint(&card.image, color)),
        row(
            "Diet",
            &format!("{} {}", card.veg.glyph, veg_role.paint(&card.veg.text, color)),
        ),
    ];

    let (bar, marker) = format_score(&card.score, color);
    lines.push(row("Nutri-Score", &bar));
    if let Some(marker) = marker {
        lines.push(format!("{}{}", indent, marker));
    }

    for (label, list) in [("Allergens", &card.allergens), ("Additives", &card.additives)] {
        let mut rows = format_pills(list, color).into_iter();
        lines.push(row(label, &rows.next().unwrap_or_default()));
        lines.extend(rows.map(|r| format!("{}{}", indent, r)));
    }

    lines.join("\n")
}

/// Scale bar plus, when the marker is on the scale, a marker line beneath it
fn format_score(score: &ScoreIndicator, color: bool) -> (String, Option<String>) {
    let segment = SCALE_WIDTH / NutriGrade::all().len();
    let bar: String = NutriGrade::all()
        .iter()
        .map(|grade| paint_hex(&"━".repeat(segment), grade.color(), color))
        .collect();
    let label = paint_hex(&score.label, score.color, color);

    if !score.visible {
        return (format!("{}  {}", bar, label), None);
    }
    match score.position_pct {
        Some(pct) if score.is_on_scale() => {
            let column = (usize::from(pct.unsigned_abs()) * SCALE_WIDTH / 100).min(SCALE_WIDTH - 1);
            let marker = format!("{}▲ {}", " ".repeat(column), label);
            (bar, Some(marker))
        }
        _ => (format!("◀ {}  {}", bar, label), None),
    }
}

/// Pill rows wrapped by display width
fn format_pills(list: &PillList, color: bool) -> Vec<String> {
    if let Some(text) = list.text() {
        return vec![StyleRole::Dim.paint(text, color)];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for entry in list.pills() {
        let pill_width = entry.width() + 2;
        if current_width > 0 && current_width + 1 + pill_width > PILL_ROW_WIDTH {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&StyleRole::Pill.paint(&format!("[{}]", entry), color));
        current_width += pill_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
