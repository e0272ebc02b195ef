//! Normalization scan.
//!
//! A single forward fold over a day's records. The section context is part of
//! the fold state, so nothing outside the fold can observe or mutate it:
//!
//! ```text
//! (context, buckets) ── record ──▶ resolve ──┬─ Header ─▶ (text, buckets)
//!                                            ├─ Food ───▶ classify ─▶ (context, buckets + name × meals)
//!                                            └─ Skip ───▶ (context, buckets)
//! ```
//!
//! Records are never revisited. A header only affects food entries after it.

use super::buckets::{MealBuckets, SectionMap, add, push};
use super::classify::classify;
use super::metrics::{ScanMetrics, ScanResult};
use super::resolve::{SectionContext, Step, resolve};
use crate::rules::MealRules;
use crate::{MenuRecord, Schedule};
use std::time::Instant;

pub fn scan_with_metrics(rules: &MealRules, records: &[MenuRecord], schedule: Schedule) -> ScanResult {
    let start = Instant::now();
    let mut metrics = ScanMetrics { records: records.len(), ..ScanMetrics::default() };

    let (_, buckets) =
        records.iter().fold((SectionContext::new(), MealBuckets::new()), |(context, mut buckets), record| {
            let step = resolve(record, &context);
            match &step {
                Step::Header(text) => {
                    tracing::trace!(header = %text, "section context");
                    metrics.headers += 1;
                }
                Step::Food { name, section } => {
                    metrics.foods += 1;
                    for meal in classify(rules, section, schedule).meals() {
                        add(&mut buckets, meal, section, name);
                        metrics.placements += 1;
                    }
                }
                Step::Skip => metrics.inert += 1,
            }
            (context.advance(&step), buckets)
        });

    metrics.elapsed = start.elapsed();
    ScanResult { buckets, metrics }
}

/// Group food names by resolved section, without meal classification.
pub fn scan_sections(records: &[MenuRecord]) -> SectionMap {
    let init = (SectionContext::new(), SectionMap::default());
    let (_, sections) = records.iter().fold(init, |(context, mut sections), record| {
        let step = resolve(record, &context);
        if let Step::Food { name, section } = &step {
            push(&mut sections, section, name);
        }
        (context.advance(&step), sections)
    });
    sections
}
