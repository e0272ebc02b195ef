//! Record boundary.
//!
//! Upstream `menu_items` entries are loosely shaped JSON: any key can be
//! missing, null, the wrong type, or blank. This module is the only place that
//! looks at raw values; everything after it works on [`MenuRecord`].
//!
//! ```text
//! Value ──┬─ food payload present ── food.name non-blank ──▶ Food
//!         │                       └─ otherwise ───────────▶ Inert
//!         └─ no food payload ─────── header text found ───▶ Header
//!                                 └─ otherwise ───────────▶ Inert
//! ```
//!
//! A record carrying a food payload is never a header, whatever else it has.
//!
//! Flat venues list entries without sections, and read them more loosely
//! through [`priced_item`].

use crate::{FoodEntry, MenuRecord, SectionHints};
use serde_json::Value;

/// Header text candidates, in priority order. `category.name` is checked last.
const HEADER_KEYS: [&str; 5] = ["name", "text", "label", "description", "menu_item_name"];

/// Listed name for a food payload without a string `name`.
pub const UNKNOWN_NAME: &str = "Unknown Name";

impl MenuRecord {
    pub fn from_value(value: &Value) -> Self {
        if !value.get("food").is_some_and(is_present) {
            return match header_text(value) {
                Some(text) => MenuRecord::Header(text),
                None => MenuRecord::Inert,
            };
        }

        let Some(name) = value.get("food").and_then(|f| text_at(f, "name")) else {
            return MenuRecord::Inert;
        };

        MenuRecord::Food(FoodEntry {
            name: name.trim().to_string(),
            hints: SectionHints {
                menu_category: nested_text(value, "menu_category", "name"),
                category: nested_text(value, "category", "name"),
                category_name: text_at(value, "category_name").map(str::to_string),
                station: text_at(value, "station").map(str::to_string),
            },
        })
    }
}

/// Classify a whole day's list.
pub fn records(values: &[Value]) -> Vec<MenuRecord> {
    values.iter().map(MenuRecord::from_value).collect()
}

/// `(name, price)` for any entry whose `food` is present and not null, even an
/// empty payload. The name is taken as-is. A missing `price` reads as `""`,
/// an explicit `null` stays `null`.
pub fn priced_item(value: &Value) -> Option<(String, Value)> {
    let food = value.get("food").filter(|f| !f.is_null())?;
    let name = food.get("name").and_then(Value::as_str).unwrap_or(UNKNOWN_NAME);
    let price = value.get("price").cloned().unwrap_or_else(|| Value::String(String::new()));
    Some((name.to_string(), price))
}

fn header_text(value: &Value) -> Option<String> {
    HEADER_KEYS
        .iter()
        .find_map(|key| text_at(value, key))
        .or_else(|| value.get("category").and_then(|c| text_at(c, "name")))
        .map(|s| s.trim().to_string())
}

/// A string field that is non-blank after trimming. Returned untrimmed.
fn text_at<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    value.get(key)?.as_str().filter(|s| !s.trim().is_empty())
}

fn nested_text(value: &Value, outer: &str, key: &str) -> Option<String> {
    value.get(outer).and_then(|o| text_at(o, key)).map(str::to_string)
}

/// Whether a payload counts as provided: not null, false, zero, or empty.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn food_payload_wins_over_header_fields() {
        let record = MenuRecord::from_value(&json!({
            "text": "Grill",
            "name": "Header-ish",
            "food": {"name": "  Burger "},
        }));
        let MenuRecord::Food(entry) = record else {
            panic!("expected food entry");
        };
        assert_eq!(entry.name, "Burger");
    }

    #[test]
    fn header_uses_first_non_blank_candidate() {
        let record = MenuRecord::from_value(&json!({
            "name": "   ",
            "text": null,
            "label": " Soup Station ",
            "description": "ignored",
        }));
        assert_eq!(record, MenuRecord::Header("Soup Station".into()));
    }

    #[test]
    fn header_falls_back_to_category_name() {
        let record = MenuRecord::from_value(&json!({"food": null, "category": {"name": "Deli"}}));
        assert_eq!(record, MenuRecord::Header("Deli".into()));
    }

    #[test]
    fn empty_food_object_is_not_a_payload() {
        let record = MenuRecord::from_value(&json!({"food": {}, "text": "Breakfast Station"}));
        assert_eq!(record, MenuRecord::Header("Breakfast Station".into()));
    }

    #[test]
    fn food_without_name_is_inert() {
        assert_eq!(MenuRecord::from_value(&json!({"food": {"id": 7}, "text": "x"})), MenuRecord::Inert);
        assert_eq!(MenuRecord::from_value(&json!({"food": {"name": "  "}})), MenuRecord::Inert);
        assert_eq!(MenuRecord::from_value(&json!({})), MenuRecord::Inert);
        assert_eq!(MenuRecord::from_value(&json!("not an object")), MenuRecord::Inert);
    }

    #[test]
    fn hints_tolerate_wrong_shapes() {
        let record = MenuRecord::from_value(&json!({
            "food": {"name": "Tacos"},
            "menu_category": "flat string, not an object",
            "category": {"name": ""},
            "category_name": 42,
            "station": "Cantina",
        }));
        let MenuRecord::Food(entry) = record else {
            panic!("expected food entry");
        };
        assert_eq!(entry.hints, SectionHints { station: Some("Cantina".into()), ..SectionHints::default() });
    }

    #[test]
    fn priced_item_lists_any_non_null_food() {
        let cases = [
            (json!({"food": {"name": "Latte"}, "price": 3.25}), Some(("Latte", json!(3.25)))),
            (json!({"food": {}, "price": 2}), Some((UNKNOWN_NAME, json!(2)))),
            (json!({"food": {"name": 17}}), Some((UNKNOWN_NAME, json!("")))),
            (json!({"food": {"name": "Scone"}, "price": null}), Some(("Scone", Value::Null))),
            (json!({"food": {"name": " Tea "}}), Some((" Tea ", json!("")))),
            (json!({"food": null, "text": "Hot Drinks"}), None),
            (json!({"text": "Hot Drinks"}), None),
        ];
        for (input, expected) in cases {
            let expected = expected.map(|(name, price)| (name.to_string(), price));
            assert_eq!(priced_item(&input), expected, "input: {input}");
        }
    }
}
