//! Section resolution.
//!
//! Each record is resolved against the current [`SectionContext`]. The context
//! is a plain value: the scan passes it in, gets a [`Step`] back, and derives
//! the next context with [`SectionContext::advance`].
//!
//! ```text
//! Header(text)  ──▶ Step::Header   context := text
//! Food(entry)   ──▶ Step::Food     context unchanged
//! Inert         ──▶ Step::Skip     context unchanged
//! ```
//!
//! Section priority for food entries: `menu_category.name`, `category.name`,
//! `category_name`, `station`, then `"Other"`. Only the literal `"Other"` is
//! replaced by the context; a feed that actually names a section "Other" is
//! indistinguishable and gets the same treatment.

use crate::{FoodEntry, MenuRecord};

pub const OTHER_SECTION: &str = "Other";

/// The most recent header text, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionContext(Option<String>);

impl SectionContext {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Context after `step` has been taken.
    pub fn advance(self, step: &Step<'_>) -> Self {
        match step {
            Step::Header(text) => Self(Some((*text).to_string())),
            Step::Food { .. } | Step::Skip => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'r> {
    Header(&'r str),
    Food { name: &'r str, section: String },
    Skip,
}

pub fn resolve<'r>(record: &'r MenuRecord, context: &SectionContext) -> Step<'r> {
    match record {
        MenuRecord::Header(text) => Step::Header(text),
        MenuRecord::Food(entry) => Step::Food { name: &entry.name, section: section_for(entry, context) },
        MenuRecord::Inert => Step::Skip,
    }
}

fn section_for(entry: &FoodEntry, context: &SectionContext) -> String {
    let hints = &entry.hints;
    let section = hints
        .menu_category
        .as_deref()
        .or(hints.category.as_deref())
        .or(hints.category_name.as_deref())
        .or(hints.station.as_deref())
        .unwrap_or(OTHER_SECTION);

    match context.current() {
        Some(ambient) if section == OTHER_SECTION => ambient.to_string(),
        _ => section.to_string(),
    }
}
