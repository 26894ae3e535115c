//! Test modules for the presentation layer

mod card;

use crate::lookup::api::{ProductRecord, VegStatus};

/// The record from the "Test Bar" scenario
pub(super) fn test_bar() -> ProductRecord {
    ProductRecord {
        name: "Test Bar".to_string(),
        categories: vec!["Snacks".to_string()],
        image_url: None,
        veg_status: VegStatus::Vegetarian,
        nutriscore: Some("b".to_string()),
        allergens: vec![],
        additives: vec!["E150".to_string()],
    }
}
