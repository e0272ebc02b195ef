//! Bucket materialization.

use super::buckets::{MealBuckets, into_blocks, take};
use crate::{Meal, MealDocument};

/// Build a document with one entry per meal in `order`.
///
/// Meals the scan never touched come out as empty lists. Meals missing from
/// `order` are dropped.
pub fn materialize(mut buckets: MealBuckets, order: &[Meal]) -> MealDocument {
    let mut doc = MealDocument::new();
    for &meal in order {
        doc.insert(meal, into_blocks(take(&mut buckets, meal)));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionBlock;
    use crate::engine::buckets::add;
    use crate::rules::meal::WEEKDAY_ORDER;

    #[test]
    fn absent_meals_are_empty() {
        let mut buckets = MealBuckets::new();
        add(&mut buckets, Meal::Lunch, "Deli", "Club");

        let doc = materialize(buckets, WEEKDAY_ORDER);
        assert_eq!(doc.meals().collect::<Vec<_>>(), WEEKDAY_ORDER);
        assert!(doc.blocks(Meal::Breakfast).is_empty());
        assert_eq!(doc.blocks(Meal::Lunch), [SectionBlock::new("Deli", vec!["Club".into()])]);
    }

    #[test]
    fn sections_are_deduped_and_sorted() {
        let mut buckets = MealBuckets::new();
        for (section, name) in [("Steak", "Ribeye"), ("grill", "Burger"), ("Steak", "Ribeye"), ("Grill", "Fries")] {
            add(&mut buckets, Meal::Dinner, section, name);
        }

        let doc = materialize(buckets, &[Meal::Dinner]);
        assert_eq!(
            doc.blocks(Meal::Dinner),
            [
                SectionBlock::new("grill", vec!["Burger".into()]),
                SectionBlock::new("Grill", vec!["Fries".into()]),
                SectionBlock::new("Steak", vec!["Ribeye".into()]),
            ]
        );
    }
}
