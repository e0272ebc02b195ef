//! Meal keyword tables shared by the dine-in venues.

use super::{FanOut, KeywordRule, MealRules, SectionRename};
use crate::{Meal, MealSet};

pub const WEEKDAY_ORDER: &[Meal] = &[Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::LateNight];

/// Brunch is last: on weekends it only receives pizza/pasta fan-out.
pub const WEEKEND_ORDER: &[Meal] = &[Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::LateNight, Meal::Brunch];

pub const LATE_NIGHT_SPECIALS: SectionRename = SectionRename { from: "Late Night Specials", to: "Grill Dinner Specials" };

/// Keyword table, checked in order. `late_night` goes first so that
/// "Late Night Dinner" is not swallowed by the dinner keyword.
pub fn keywords() -> Vec<KeywordRule> {
    vec![
        keyword!(Meal::LateNight, r"(?i)\blate\s*night\b"),
        keyword!(Meal::Breakfast, r"(?i)\bbreakfast\b"),
        keyword!(Meal::Lunch, r"(?i)\blunch\b"),
        keyword!(Meal::Dinner, r"(?i)\bdinner\b"),
    ]
}

/// Pizza and pasta stations run all day.
pub fn pizza_pasta() -> FanOut {
    FanOut {
        patterns: vec![regex!(r"(?i)\bpizza\b"), regex!(r"(?i)\bpasta\b")],
        weekday: MealSet::LUNCH | MealSet::DINNER | MealSet::LATE_NIGHT,
        weekend: MealSet::BRUNCH | MealSet::DINNER,
    }
}

/// Rules for the East and West Side dine-in specials feeds.
pub fn dine_in() -> MealRules {
    MealRules {
        keywords: keywords(),
        fan_out: Some(pizza_pasta()),
        fallback: Meal::Dinner,
        late_night_rename: Some(LATE_NIGHT_SPECIALS),
        weekday_order: WEEKDAY_ORDER,
        weekend_order: WEEKEND_ORDER,
    }
}
