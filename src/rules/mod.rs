//! Rule configuration.
//!
//! The engine is parameterized by a [`MealRules`] value; every venue that
//! produces a meal-partitioned menu carries one. Rule tables are built once
//! behind `Lazy` statics and shared read-only.

use crate::{Meal, MealSet};
use regex::Regex;

pub mod meal;
pub mod venues;


/// A meal keyword: sections matching `pattern` belong to `meal`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub meal: Meal,
    pub pattern: &'static Regex,
}

/// Sections served across several meals. Matched before keywords.
#[derive(Debug, Clone)]
pub struct FanOut {
    pub patterns: Vec<&'static Regex>,
    pub weekday: MealSet,
    pub weekend: MealSet,
}

impl FanOut {
    pub fn matches(&self, section: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(section))
    }
}

/// A late-night section that moves into dinner under a new name on weekends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRename {
    pub from: &'static str,
    pub to: &'static str,
}

/// Everything the engine needs to partition one venue's day.
#[derive(Debug, Clone)]
pub struct MealRules {
    /// Ordered keyword table; the first matching rule wins.
    pub keywords: Vec<KeywordRule>,
    pub fan_out: Option<FanOut>,
    /// Meal used when no keyword matches.
    pub fallback: Meal,
    pub late_night_rename: Option<SectionRename>,
    pub weekday_order: &'static [Meal],
    pub weekend_order: &'static [Meal],
}

impl MealRules {
    pub fn meal_order(&self, weekend: bool) -> &'static [Meal] {
        if weekend { self.weekend_order } else { self.weekday_order }
    }
}
