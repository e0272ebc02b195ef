extern crate self as menuscan;

use indexmap::IndexMap;
use serde::Serialize;

#[macro_use]
mod macros;
mod api;
mod calendar;
mod engine;
mod error;
mod fetch;
mod report;
mod rules;
mod store;

pub use api::{Options, ScanDetails, normalize, normalize_verbose, run_venue};
pub use calendar::{Context, HoursKey};
pub use engine::{ScanMetrics, dedupe};
pub use error::{Error, Result};
pub use fetch::{FileSource, HttpSource, MenuSource, WeekMenu};
pub use report::{FlatItem, FlatReport, MenuReport, Report, StallReport, StallSection, Status};
pub use rules::venues::{Feed, HoursTable, Stall, StallTable, Venue, VenueKind, find_venue, venues};
pub use rules::{FanOut, KeywordRule, MealRules, SectionRename};
pub use store::write_report;

// --- Meals ------------------------------------------------------------------

/// A meal bucket. Serialized in snake_case (`late_night`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    LateNight,
    Brunch,
}

impl Meal {
    pub const ALL: [Meal; 5] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::LateNight, Meal::Brunch];

    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::LateNight => "late_night",
            Meal::Brunch => "brunch",
        }
    }

    fn flag(self) -> MealSet {
        match self {
            Meal::Breakfast => MealSet::BREAKFAST,
            Meal::Lunch => MealSet::LUNCH,
            Meal::Dinner => MealSet::DINNER,
            Meal::LateNight => MealSet::LATE_NIGHT,
            Meal::Brunch => MealSet::BRUNCH,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Set of meal buckets a section is classified into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MealSet: u8 {
        const BREAKFAST  = 1 << 0;
        const LUNCH      = 1 << 1;
        const DINNER     = 1 << 2;
        const LATE_NIGHT = 1 << 3;
        const BRUNCH     = 1 << 4;
    }
}

impl MealSet {
    pub fn single(meal: Meal) -> Self {
        meal.flag()
    }

    pub fn contains_meal(self, meal: Meal) -> bool {
        self.contains(meal.flag())
    }

    /// Meals in the set, in `Meal::ALL` order.
    pub fn meals(self) -> impl Iterator<Item = Meal> {
        Meal::ALL.into_iter().filter(move |m| self.contains(m.flag()))
    }
}

/// Which rule variant applies for the service day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    Weekday,
    Weekend,
}

impl Schedule {
    pub fn from_weekend(is_weekend: bool) -> Self {
        if is_weekend { Schedule::Weekend } else { Schedule::Weekday }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Schedule::Weekend)
    }
}

// --- Records ----------------------------------------------------------------

/// Categorization hints carried by a food entry, in resolution priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionHints {
    pub menu_category: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub station: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodEntry {
    pub name: String,
    pub hints: SectionHints,
}

/// One entry of a day's `menu_items`, after boundary classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRecord {
    Header(String),
    Food(FoodEntry),
    Inert,
}

// --- Output -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    pub section: String,
    pub items: Vec<String>,
}

impl SectionBlock {
    pub fn new(section: impl Into<String>, items: Vec<String>) -> Self {
        Self { section: section.into(), items }
    }
}

/// Meal name to section blocks, keyed in meal order.
///
/// Serializes as a JSON object whose key order follows insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealDocument {
    meals: IndexMap<Meal, Vec<SectionBlock>>,
}

impl MealDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `meal` to `blocks`, replacing any previous entry in place.
    pub fn insert(&mut self, meal: Meal, blocks: Vec<SectionBlock>) {
        self.meals.insert(meal, blocks);
    }

    pub fn get(&self, meal: Meal) -> Option<&[SectionBlock]> {
        self.meals.get(&meal).map(Vec::as_slice)
    }

    /// Blocks for `meal`, or an empty slice when the meal is absent.
    pub fn blocks(&self, meal: Meal) -> &[SectionBlock] {
        self.get(meal).unwrap_or(&[])
    }

    pub fn meals(&self) -> impl Iterator<Item = Meal> + '_ {
        self.meals.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Meal, &[SectionBlock])> {
        self.meals.iter().map(|(m, b)| (*m, b.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Total number of items across all meals and sections.
    pub fn item_count(&self) -> usize {
        self.meals.values().flatten().map(|b| b.items.len()).sum()
    }
}
