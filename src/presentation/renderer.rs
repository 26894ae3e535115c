//! Mapping lookup progress and outcomes onto a presentation sink

use crate::lookup::api::LookupOutcome;
use crate::presentation::card::ProductCard;

/// A display surface with a loading indicator, an error banner and a product card
///
/// The renderer drives these operations; sinks only draw.
pub trait PresentationSink: Send {
    fn set_loading_visible(&mut self, visible: bool);

    fn set_card_visible(&mut self, visible: bool);

    /// Show the banner with `message` as its literal text, or hide it on `None`
    fn show_error(&mut self, message: Option<&str>);

    /// Populate the card without changing its visibility
    fn render_card(&mut self, card: &ProductCard);
}

impl<P: PresentationSink + ?Sized> PresentationSink for Box<P> {
    fn set_loading_visible(&mut self, visible: bool) {
        (**self).set_loading_visible(visible)
    }

    fn set_card_visible(&mut self, visible: bool) {
        (**self).set_card_visible(visible)
    }

    fn show_error(&mut self, message: Option<&str>) {
        (**self).show_error(message)
    }

    fn render_card(&mut self, card: &ProductCard) {
        (**self).render_card(card)
    }
}

/// Where the display currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Which regions are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub loading: bool,
    pub card: bool,
    pub error: bool,
}

impl Phase {
    pub fn visibility(self) -> Visibility {
        match self {
            Phase::Idle => Visibility::default(),
            Phase::Loading => Visibility {
                loading: true,
                ..Visibility::default()
            },
            Phase::Success => Visibility {
                card: true,
                ..Visibility::default()
            },
            Phase::Error => Visibility {
                error: true,
                ..Visibility::default()
            },
        }
    }
}

/// Drives a [`PresentationSink`] through lookup phases
pub struct Renderer<P: PresentationSink> {
    sink: P,
    placeholder_image: String,
    phase: Phase,
}

impl<P: PresentationSink> Renderer<P> {
    pub fn new(sink: P, placeholder_image: impl Into<String>) -> Self {
        Self {
            sink,
            placeholder_image: placeholder_image.into(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn into_sink(self) -> P {
        self.sink
    }

    /// Clear the display and show the loading indicator
    pub fn begin_loading(&mut self) {
        self.sink.set_loading_visible(true);
        self.sink.set_card_visible(false);
        self.sink.show_error(None);
        self.phase = Phase::Loading;
    }

    /// Hide the loading indicator; runs for every settled lookup
    pub fn finish_loading(&mut self) {
        self.sink.set_loading_visible(false);
        if self.phase == Phase::Loading {
            self.phase = Phase::Idle;
        }
    }

    /// Render a settled lookup
    ///
    /// The result replaces whatever an earlier lookup left on screen, so the
    /// last outcome rendered is the one displayed.
    pub fn render_outcome(&mut self, outcome: &LookupOutcome) {
        match outcome {
            LookupOutcome::Success(record) => {
                let card = ProductCard::from_record(record, &self.placeholder_image);
                self.sink.show_error(None);
                self.sink.render_card(&card);
                self.sink.set_card_visible(true);
                self.phase = Phase::Success;
            }
            LookupOutcome::Failure(message) => self.show_banner(message),
        }
    }

    /// Show the error banner with `message`, hiding the card
    pub fn show_banner(&mut self, message: &str) {
        self.sink.set_card_visible(false);
        self.sink.show_error(Some(message));
        self.phase = Phase::Error;
    }
}
