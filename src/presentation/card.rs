//! Product card contents derived from a [`ProductRecord`]

use crate::lookup::api::{ProductRecord, VegStatus};
use crate::presentation::score::ScoreIndicator;
use serde::Serialize;

/// Image shown when a product has none
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/100x100?text=No+Image";

/// Text shown instead of pills for an empty list
pub const NONE_DETECTED: &str = "None detected";

/// Separator between categories on the category line
const CATEGORY_SEPARATOR: &str = ", ";

/// Visual style of the veg badge; exactly one applies at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VegStyle {
    Green,
    Red,
    Unknown,
}

impl VegStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            VegStyle::Green => "veg-green",
            VegStyle::Red => "veg-red",
            VegStyle::Unknown => "veg-unknown",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            VegStyle::Green => "🥬",
            VegStyle::Red => "🍖",
            VegStyle::Unknown => "❓",
        }
    }
}

impl From<VegStatus> for VegStyle {
    fn from(status: VegStatus) -> Self {
        match status {
            VegStatus::Vegetarian | VegStatus::Vegan => VegStyle::Green,
            VegStatus::NonVegetarian => VegStyle::Red,
            VegStatus::Unknown => VegStyle::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VegBadge {
    pub style: VegStyle,
    pub glyph: &'static str,
    pub text: String,
}

impl VegBadge {
    pub fn for_status(status: VegStatus) -> Self {
        let style = VegStyle::from(status);
        Self {
            style,
            glyph: style.glyph(),
            text: status.to_string(),
        }
    }
}

/// A list rendered as pill tags, or the "None detected" text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PillList {
    Pills(Vec<String>),
    #[serde(serialize_with = "serialize_none_detected")]
    NoneDetected,
}

fn serialize_none_detected<S: serde::Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(NONE_DETECTED)
}

impl PillList {
    pub fn from_entries(entries: &[String]) -> Self {
        if entries.is_empty() {
            PillList::NoneDetected
        } else {
            PillList::Pills(entries.to_vec())
        }
    }

    /// The pills in input order; empty for `NoneDetected`
    pub fn pills(&self) -> &[String] {
        match self {
            PillList::Pills(pills) => pills,
            PillList::NoneDetected => &[],
        }
    }

    /// Literal text of the list as a display surface shows it
    pub fn text(&self) -> Option<&'static str> {
        match self {
            PillList::Pills(_) => None,
            PillList::NoneDetected => Some(NONE_DETECTED),
        }
    }
}

/// Everything the product card displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub name: String,
    pub category_line: String,
    pub image: String,
    pub veg: VegBadge,
    pub allergens: PillList,
    pub additives: PillList,
    pub score: ScoreIndicator,
}

impl ProductCard {
    /// Build the card for `record`, using `placeholder_image` when it has no image
    pub fn from_record(record: &ProductRecord, placeholder_image: &str) -> Self {
        let image = record
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder_image)
            .to_string();

        Self {
            name: record.name.clone(),
            category_line: record.categories.join(CATEGORY_SEPARATOR),
            image,
            veg: VegBadge::for_status(record.veg_status),
            allergens: PillList::from_entries(&record.allergens),
            additives: PillList::from_entries(&record.additives),
            score: ScoreIndicator::for_grade(record.nutriscore.as_deref()),
        }
    }
}
