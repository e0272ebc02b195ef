use crate::calendar::{Context, TIMEZONE};
use crate::engine::{self, MealBuckets, ScanMetrics, record};
use crate::fetch::{self, MenuSource};
use crate::report::{FlatItem, FlatReport, MenuReport, Report, StallReport, StallSection, Status};
use crate::rules::MealRules;
use crate::rules::venues::{CLOSED, Feed, StallTable, Venue, VenueKind};
use crate::{MealDocument, MenuRecord, Schedule};
use chrono::NaiveDate;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime options for a batch of venues.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory reports are written to.
    pub out_dir: PathBuf,
    /// HTTP request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { out_dir: PathBuf::from("."), timeout: fetch::TIMEOUT, user_agent: fetch::USER_AGENT.to_string() }
    }
}

impl Options {
    /// Defaults, with `MENUSCAN_OUT_DIR` applied when set.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(dir) = std::env::var_os("MENUSCAN_OUT_DIR").filter(|d| !d.is_empty()) {
            options.out_dir = PathBuf::from(dir);
        }
        options
    }
}

/// Result of [`normalize_verbose`].
#[derive(Debug, Clone)]
pub struct ScanDetails {
    pub document: MealDocument,
    pub metrics: ScanMetrics,
}

/// Normalize one day's raw `menu_items` into a meal document.
///
/// # Example
/// ```
/// use menuscan::{Meal, Schedule, find_venue, normalize, VenueKind};
/// use serde_json::json;
///
/// let Some(VenueKind::Meals { rules, .. }) = find_venue("east").map(|v| &v.kind) else { panic!() };
/// let items = vec![json!({"text": "Breakfast Station"}), json!({"food": {"name": "Eggs"}})];
/// let doc = normalize(rules, &items, Schedule::Weekday);
/// assert_eq!(doc.blocks(Meal::Breakfast)[0].items, ["Eggs"]);
/// ```
pub fn normalize(rules: &MealRules, items: &[Value], schedule: Schedule) -> MealDocument {
    normalize_verbose(rules, items, schedule).document
}

/// Like [`normalize`], also returning scan metrics.
pub fn normalize_verbose(rules: &MealRules, items: &[Value], schedule: Schedule) -> ScanDetails {
    let records = record::records(items);
    let (document, metrics) = engine::normalize_records(rules, &records, schedule);
    ScanDetails { document, metrics }
}

/// Produce `venue`'s report for the day in `context`.
///
/// Never fails: fetch problems become a report status (or a closed stall).
pub fn run_venue(venue: &Venue, source: &dyn MenuSource, context: &Context) -> Report {
    let _span = tracing::info_span!("venue", slug = venue.slug).entered();
    match &venue.kind {
        VenueKind::Meals { feed, rules } => Report::Menu(menu_report(venue, feed, rules, source, context)),
        VenueKind::Stalls(table) => Report::Stalls(stall_report(venue, table, source, context)),
        VenueKind::Flat { feed } => Report::Flat(flat_report(venue, feed, source, context)),
    }
}

/// Today's records for `feed`: `Ok(None)` when the API has no (or an empty) day.
fn day_records(source: &dyn MenuSource, feed: &Feed, date: NaiveDate) -> crate::Result<Option<Vec<MenuRecord>>> {
    let week = source.fetch_week(feed, date)?;
    let date = date.format("%Y-%m-%d").to_string();
    match week.day(&date) {
        Some(items) if !items.is_empty() => {
            tracing::info!(%date, items = items.len(), "found day");
            Ok(Some(record::records(items)))
        }
        _ => Ok(None),
    }
}

fn menu_report(venue: &Venue, feed: &Feed, rules: &MealRules, source: &dyn MenuSource, ctx: &Context) -> MenuReport {
    let date = ctx.date();
    let schedule = ctx.schedule();

    let (status, message, buckets) = match day_records(source, feed, ctx.today()) {
        Ok(Some(records)) => {
            let result = engine::scan_with_metrics(rules, &records, schedule);
            tracing::debug!(metrics = ?result.metrics, "scan complete");
            (Status::Ok, "Menu fetched and categorized.".to_string(), result.buckets)
        }
        Ok(None) => {
            let message = format!("API data does not contain {date} (or empty).");
            tracing::info!("{message}");
            (Status::NoDataToday, message, MealBuckets::new())
        }
        Err(err) => {
            tracing::warn!(error = %err, "fetch failed");
            (Status::FetchError, format!("Error fetching menu: {err}"), MealBuckets::new())
        }
    };

    MenuReport {
        date,
        location: venue.label.to_string(),
        is_weekend: schedule.is_weekend(),
        status,
        message,
        updated_at: ctx.updated_at(),
        timezone: TIMEZONE.to_string(),
        meals: engine::shape(rules, buckets, schedule),
        source_url: source.describe(feed, ctx.today()),
    }
}

fn stall_report(venue: &Venue, table: &StallTable, source: &dyn MenuSource, ctx: &Context) -> StallReport {
    let key = ctx.hours_key();

    let sections = table
        .stalls
        .iter()
        .map(|stall| {
            let date = table.fetch_date(stall, ctx.today());
            let scheduled = table.hours_for(stall, key);

            let items = if scheduled == CLOSED {
                tracing::info!(stall = stall.name, "closed today, not fetching");
                Vec::new()
            } else {
                stall_items(source, &table.feed(stall), date)
            };
            let hours = if items.is_empty() { CLOSED } else { scheduled };

            StallSection {
                section: stall.name.to_string(),
                hours_today: hours.to_string(),
                items,
                menu_url: table.menu_url(stall, date),
            }
        })
        .collect();

    StallReport {
        date: ctx.date(),
        location: venue.label.to_string(),
        hours_today: table.hours.for_key(key).to_string(),
        updated_at: ctx.updated_at(),
        timezone: TIMEZONE.to_string(),
        sections,
    }
}

/// A stall's items, grouped by section then flattened. Any failure is an
/// empty list.
fn stall_items(source: &dyn MenuSource, feed: &Feed, date: NaiveDate) -> Vec<String> {
    match day_records(source, feed, date) {
        Ok(Some(records)) => engine::dedupe(&engine::flatten(engine::scan_sections(&records))),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(menu_type = feed.menu_type, error = %err, "stall fetch failed");
            Vec::new()
        }
    }
}

fn flat_report(venue: &Venue, feed: &Feed, source: &dyn MenuSource, ctx: &Context) -> FlatReport {
    let date = ctx.date();

    let (status, message, menu) = match source.fetch_week(feed, ctx.today()) {
        Ok(week) => match week.day(&date) {
            Some(items) => {
                let menu: Vec<FlatItem> =
                    items.iter().filter_map(record::priced_item).map(|(name, price)| FlatItem { name, price }).collect();
                (Status::Ok, format!("Valid menu items: {}.", menu.len()), menu)
            }
            None => (Status::NoDataToday, format!("API data does not contain {date}."), Vec::new()),
        },
        Err(err) => {
            tracing::warn!(error = %err, "fetch failed");
            (Status::FetchError, format!("Error fetching menu: {err}"), Vec::new())
        }
    };

    FlatReport { date, location: venue.label.to_string(), status, message, menu, updated_at: ctx.updated_at() }
}
