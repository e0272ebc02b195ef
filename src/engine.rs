//! Menu normalization engine.
//!
//! This module turns one day's flat `menu_items` list into a
//! [`MealDocument`](crate::MealDocument). It is purely synchronous and owns all
//! of its state per call, so independent venues can be normalized in parallel
//! against the same shared rule tables.
//!
//! ## How the parts work together
//!
//! ```text
//! Vec<Value> ── MenuRecord::from_value ──▶ Vec<MenuRecord>     (record.rs)
//!                                               │
//!                                               v
//!                          scan: fold over records               (scan.rs)
//!                            - resolve section + context         (resolve.rs)
//!                            - classify into meals               (classify.rs)
//!                            - append to MealBuckets             (buckets.rs)
//!                                               │
//!                                               v
//!                          materialize(meal order)               (materialize.rs)
//!                            - dedupe items                      (dedup.rs)
//!                            - sort sections case-insensitively
//!                                               │
//!                              weekday ─────────┤
//!                                               v
//!                          weekend: consolidate → brunch/dinner  (consolidate.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `record.rs`: the only code that reads raw JSON. Produces the closed
//!   `Header | Food | Inert` variant set.
//! - `resolve.rs`: section priority and the `"Other"` → context fallback.
//! - `classify.rs`: fan-out override, then ordered keyword table.
//! - `scan.rs`: the fold; also the section-only fold used by stall venues.
//! - `buckets.rs`: insertion-ordered accumulator.
//! - `materialize.rs` / `consolidate.rs`: output shaping.
//! - `metrics.rs`: per-scan counts and timing.
//!
//! ## Debugging
//!
//! Run with `MENUSCAN_LOG=menuscan=trace` to see every header the scan picks
//! up, and `debug` for per-venue scan metrics.

#[path = "engine/buckets.rs"]
mod buckets;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/consolidate.rs"]
mod consolidate;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/materialize.rs"]
mod materialize;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/record.rs"]
pub(crate) mod record;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/scan.rs"]
mod scan;

pub use buckets::{MealBuckets, flatten};
#[allow(unused_imports)]
pub use classify::classify;
pub use consolidate::consolidate;
pub use dedup::dedupe;
pub use materialize::materialize;
pub use metrics::{ScanMetrics, ScanResult};
#[allow(unused_imports)]
pub use resolve::{OTHER_SECTION, SectionContext, Step, resolve};
pub use scan::{scan_sections, scan_with_metrics};

use crate::rules::MealRules;
use crate::{MealDocument, MenuRecord, Schedule};

/// Full pipeline for one venue-day: scan, materialize, and consolidate on
/// weekends.
pub fn normalize_records(rules: &MealRules, records: &[MenuRecord], schedule: Schedule) -> (MealDocument, ScanMetrics) {
    let ScanResult { buckets, metrics } = scan_with_metrics(rules, records, schedule);
    (shape(rules, buckets, schedule), metrics)
}

/// Materialize `buckets` for `schedule`, consolidating on weekends.
pub fn shape(rules: &MealRules, buckets: MealBuckets, schedule: Schedule) -> MealDocument {
    let doc = materialize(buckets, rules.meal_order(schedule.is_weekend()));
    match schedule {
        Schedule::Weekday => doc,
        Schedule::Weekend => consolidate(&doc, rules.late_night_rename.as_ref()),
    }
}
