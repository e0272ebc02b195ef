//! Meal classification.
//!
//! ```text
//! section ──┬─ fan-out match ──▶ weekday/weekend meal set
//!           └─ keyword table ──▶ first matching meal, else fallback
//! ```
//!
//! The result is never empty. All meals share the input section name.

use crate::rules::MealRules;
use crate::{MealSet, Schedule};

pub fn classify(rules: &MealRules, section: &str, schedule: Schedule) -> MealSet {
    if let Some(fan_out) = rules.fan_out.as_ref().filter(|f| f.matches(section)) {
        let set = match schedule {
            Schedule::Weekday => fan_out.weekday,
            Schedule::Weekend => fan_out.weekend,
        };
        if !set.is_empty() {
            return set;
        }
    }

    let meal = rules.keywords.iter().find(|k| k.pattern.is_match(section)).map(|k| k.meal).unwrap_or(rules.fallback);
    MealSet::single(meal)
}
