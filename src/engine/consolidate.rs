//! Weekend consolidation.
//!
//! Weekend service runs two meals. The weekday buckets collapse as:
//!
//! ```text
//! breakfast + lunch + brunch ─────────────▶ brunch
//! dinner + late_night (renamed section) ──▶ dinner
//! ```
//!
//! Blocks sharing a section name are unioned: items concatenate in input order,
//! then dedupe. Output blocks are sorted the same way materialization sorts.

use super::buckets::{SectionMap, into_blocks};
use super::resolve::OTHER_SECTION;
use crate::rules::SectionRename;
use crate::{Meal, MealDocument, SectionBlock};

pub fn consolidate(doc: &MealDocument, rename: Option<&SectionRename>) -> MealDocument {
    let brunch_sources = [Meal::Breakfast, Meal::Lunch, Meal::Brunch];
    let brunch = merge(brunch_sources.iter().flat_map(|&m| doc.blocks(m)).map(|b| (b.section.as_str(), b)));

    let late_night = doc.blocks(Meal::LateNight).iter().map(|b| match rename {
        Some(r) if b.section == r.from => (r.to, b),
        _ => (b.section.as_str(), b),
    });
    let dinner = merge(doc.blocks(Meal::Dinner).iter().map(|b| (b.section.as_str(), b)).chain(late_night));

    let mut out = MealDocument::new();
    out.insert(Meal::Brunch, brunch);
    out.insert(Meal::Dinner, dinner);
    out
}

fn merge<'a>(blocks: impl Iterator<Item = (&'a str, &'a SectionBlock)>) -> Vec<SectionBlock> {
    let mut sections = SectionMap::default();
    for (section, block) in blocks {
        let section = if section.is_empty() { OTHER_SECTION } else { section };
        sections.entry(section.to_string()).or_default().extend(block.items.iter().cloned());
    }
    into_blocks(sections)
}
