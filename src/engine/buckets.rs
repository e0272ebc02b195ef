//! Scan accumulator.
//!
//! `MealBuckets` maps meal → section → names. Both levels keep insertion
//! order: materialization sorts sections with a stable sort, so first-seen
//! order is what breaks ties between names that differ only in case.

use super::dedup::dedupe;
use crate::{Meal, SectionBlock};
use indexmap::IndexMap;

/// Section name → names, in first-seen section order. Names may repeat.
pub type SectionMap = IndexMap<String, Vec<String>>;

/// Meal → sections accumulator for one scan.
pub type MealBuckets = IndexMap<Meal, SectionMap>;

pub fn add(buckets: &mut MealBuckets, meal: Meal, section: &str, name: &str) {
    push(buckets.entry(meal).or_default(), section, name);
}

pub fn push(sections: &mut SectionMap, section: &str, name: &str) {
    sections.entry(section.to_string()).or_default().push(name.to_string());
}

/// Remove and return the sections for `meal`, leaving the others in order.
pub fn take(buckets: &mut MealBuckets, meal: Meal) -> SectionMap {
    buckets.shift_remove(&meal).unwrap_or_default()
}

/// Deduplicated blocks sorted by case-insensitive section name.
pub fn into_blocks(sections: SectionMap) -> Vec<SectionBlock> {
    let mut blocks: Vec<SectionBlock> =
        sections.into_iter().map(|(section, names)| SectionBlock { items: dedupe(&names), section }).collect();
    blocks.sort_by_cached_key(|b| b.section.to_lowercase());
    blocks
}

/// All names across sections, in section order.
pub fn flatten(sections: SectionMap) -> Vec<String> {
    sections.into_values().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_first_seen_order_and_duplicates() {
        let mut map = SectionMap::default();
        push(&mut map, "Grill", "Burger");
        push(&mut map, "Deli", "Club");
        push(&mut map, "Grill", "Burger");

        assert_eq!(map.keys().collect::<Vec<_>>(), ["Grill", "Deli"]);
        assert_eq!(map["Grill"], ["Burger", "Burger"]);
    }

    #[test]
    fn into_blocks_sorts_case_insensitively_and_stably() {
        let mut map = SectionMap::default();
        push(&mut map, "pizza", "Cheese");
        push(&mut map, "Grill", "Burger");
        push(&mut map, "Pizza", "Pepperoni");
        push(&mut map, "grill", "Hot Dog");

        let sections: Vec<String> = into_blocks(map).into_iter().map(|b| b.section).collect();
        assert_eq!(sections, vec!["Grill", "grill", "pizza", "Pizza"]);
    }

    #[test]
    fn take_leaves_other_meals_in_order() {
        let mut buckets = MealBuckets::new();
        add(&mut buckets, Meal::Breakfast, "Grill", "Eggs");
        add(&mut buckets, Meal::Lunch, "Deli", "Club");
        add(&mut buckets, Meal::Dinner, "Grill", "Steak");

        assert_eq!(take(&mut buckets, Meal::Lunch)["Deli"], ["Club"]);
        assert!(take(&mut buckets, Meal::Lunch).is_empty());
        assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), [Meal::Breakfast, Meal::Dinner]);
    }

    #[test]
    fn flatten_follows_section_order() {
        let mut map = SectionMap::default();
        push(&mut map, "Noodles", "Lo Mein");
        push(&mut map, "Sides", "Dumplings");
        push(&mut map, "Noodles", "Chow Fun");
        assert_eq!(flatten(map), ["Lo Mein", "Chow Fun", "Dumplings"]);
    }
}
