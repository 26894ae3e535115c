//! Product data returned by a lookup

use crate::lookup::error::LookupResult;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Dietary classification of a product
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(from = "Option<String>", into = "String")]
pub enum VegStatus {
    Vegetarian,
    Vegan,
    #[strum(serialize = "Non-Vegetarian")]
    NonVegetarian,
    #[default]
    Unknown,
}

impl From<Option<String>> for VegStatus {
    fn from(value: Option<String>) -> Self {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or(VegStatus::Unknown)
    }
}

impl From<VegStatus> for String {
    fn from(value: VegStatus) -> Self {
        value.to_string()
    }
}

/// A product as returned by the product service
///
/// Only `name` is required on the wire; every other field falls back to its
/// empty value when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub veg_status: VegStatus,
    /// Raw grade text; see [`ScoreIndicator`](crate::presentation::api::ScoreIndicator)
    #[serde(default)]
    pub nutriscore: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub additives: Vec<String>,
}

/// Result of one lookup attempt, consumed once by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success(ProductRecord),
    Failure(String),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }
}

impl From<LookupResult<ProductRecord>> for LookupOutcome {
    fn from(result: LookupResult<ProductRecord>) -> Self {
        match result {
            Ok(record) => LookupOutcome::Success(record),
            Err(e) => LookupOutcome::Failure(e.to_string()),
        }
    }
}
