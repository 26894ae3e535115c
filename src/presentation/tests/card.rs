//! Card field mapping

use super::test_bar;
use crate::lookup::api::VegStatus;
use crate::presentation::api::*;

#[test]
fn test_test_bar_card() {
    let card = ProductCard::from_record(&test_bar(), PLACEHOLDER_IMAGE);

    assert_eq!(card.name, "Test Bar");
    assert_eq!(card.category_line, "Snacks");
    assert_eq!(card.image, PLACEHOLDER_IMAGE);
    assert_eq!(card.veg.style, VegStyle::Green);
    assert_eq!(card.veg.glyph, "🥬");
    assert_eq!(card.veg.text, "Vegetarian");
    assert_eq!(card.score.position_pct, Some(30));
    assert_eq!(card.score.color, "#85BB2F");
    assert_eq!(card.score.label, "B");
    assert_eq!(card.allergens, PillList::NoneDetected);
    assert_eq!(card.allergens.text(), Some("None detected"));
    assert_eq!(card.additives.pills(), ["E150".to_string()]);
}

#[test]
fn test_category_line_joins_with_comma_space() {
    let mut record = test_bar();
    record.categories = vec!["Snacks".into(), "Sweet snacks".into(), "Bars".into()];
    let card = ProductCard::from_record(&record, PLACEHOLDER_IMAGE);
    assert_eq!(card.category_line, "Snacks, Sweet snacks, Bars");

    record.categories.clear();
    let card = ProductCard::from_record(&record, PLACEHOLDER_IMAGE);
    assert_eq!(card.category_line, "");
}

#[test]
fn test_image_falls_back_to_placeholder_when_empty() {
    let mut record = test_bar();
    record.image_url = Some(String::new());
    assert_eq!(
        ProductCard::from_record(&record, "placeholder.png").image,
        "placeholder.png"
    );

    record.image_url = Some("https://images.example/bar.jpg".to_string());
    assert_eq!(
        ProductCard::from_record(&record, "placeholder.png").image,
        "https://images.example/bar.jpg"
    );
}

#[test]
fn test_veg_badge_classification() {
    let cases = [
        (VegStatus::Vegetarian, VegStyle::Green, "🥬", "veg-green"),
        (VegStatus::Vegan, VegStyle::Green, "🥬", "veg-green"),
        (VegStatus::NonVegetarian, VegStyle::Red, "🍖", "veg-red"),
        (VegStatus::Unknown, VegStyle::Unknown, "❓", "veg-unknown"),
    ];
    for (status, style, glyph, class) in cases {
        let badge = VegBadge::for_status(status);
        assert_eq!(badge.style, style, "{}", status);
        assert_eq!(badge.glyph, glyph, "{}", status);
        assert_eq!(badge.style.class_name(), class, "{}", status);
        assert_eq!(badge.text, status.to_string());
    }
}

#[test]
fn test_pills_keep_input_order() {
    let mut record = test_bar();
    record.allergens = vec!["Milk".to_string(), "Nuts".to_string()];
    record.additives.clear();
    let card = ProductCard::from_record(&record, PLACEHOLDER_IMAGE);

    assert_eq!(card.allergens.pills(), ["Milk".to_string(), "Nuts".to_string()]);
    assert_eq!(card.allergens.text(), None);
    assert_eq!(card.additives.text(), Some(NONE_DETECTED));
    assert!(card.additives.pills().is_empty());
}

#[test]
fn test_card_serializes_none_detected_literally() {
    let card = ProductCard::from_record(&test_bar(), PLACEHOLDER_IMAGE);
    let value = serde_json::to_value(&card).unwrap();

    assert_eq!(value["allergens"], "None detected");
    assert_eq!(value["additives"], serde_json::json!(["E150"]));
    assert_eq!(value["veg"]["style"], "green");
    assert_eq!(value["score"]["position_pct"], 30);
}
