//! Venue registry.
//!
//! Every venue is a configuration value. Adding a venue means adding an entry
//! to [`VENUES`], not writing a new pipeline.

use super::MealRules;
use super::meal;
use crate::calendar::HoursKey;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// A menu feed on the upstream API (`school` / `menu-type` path segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feed {
    pub school: &'static str,
    pub menu_type: &'static str,
}

/// Hours of operation by weekday key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursTable {
    pub mon_thu: &'static str,
    pub fri: &'static str,
    pub sat: &'static str,
    pub sun: &'static str,
}

pub const CLOSED: &str = "Closed";

impl HoursTable {
    pub fn for_key(&self, key: HoursKey) -> &'static str {
        match key {
            HoursKey::MonThu => self.mon_thu,
            HoursKey::Fri => self.fri,
            HoursKey::Sat => self.sat,
            HoursKey::Sun => self.sun,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stall {
    pub name: &'static str,
    pub menu_type: &'static str,
    /// Daily stalls are fetched for today; the rest for the table's pinned date.
    pub daily: bool,
    /// Overrides the venue-wide hours.
    pub hours: Option<HoursTable>,
}

#[derive(Debug, Clone)]
pub struct StallTable {
    pub school: &'static str,
    pub stalls: &'static [Stall],
    pub hours: HoursTable,
    /// Date used for stalls whose menu does not change day to day. `None`
    /// fetches every stall for today.
    pub pinned_date: Option<NaiveDate>,
    /// Public menu page, `{slug}` and `{date}` substituted.
    pub menu_url: &'static str,
}

impl StallTable {
    pub fn hours_for(&self, stall: &Stall, key: HoursKey) -> &'static str {
        stall.hours.unwrap_or(self.hours).for_key(key)
    }

    pub fn fetch_date(&self, stall: &Stall, today: NaiveDate) -> NaiveDate {
        match self.pinned_date {
            Some(date) if !stall.daily => date,
            _ => today,
        }
    }

    pub fn menu_url(&self, stall: &Stall, date: NaiveDate) -> String {
        self.menu_url.replace("{slug}", stall.menu_type).replace("{date}", &date.format("%Y-%m-%d").to_string())
    }

    pub fn feed(&self, stall: &Stall) -> Feed {
        Feed { school: self.school, menu_type: stall.menu_type }
    }
}

#[derive(Debug, Clone)]
pub enum VenueKind {
    /// Meal-partitioned menu produced by the normalization engine.
    Meals { feed: Feed, rules: MealRules },
    /// One flat item list per stall, with hours.
    Stalls(StallTable),
    /// Plain `{name, price}` list.
    Flat { feed: Feed },
}

#[derive(Debug, Clone)]
pub struct Venue {
    pub slug: &'static str,
    pub label: &'static str,
    pub file_name: &'static str,
    pub kind: VenueKind,
}

const JASMINE_HOURS: HoursTable =
    HoursTable { mon_thu: "11am to 8pm", fri: "11am to 8pm", sat: "12pm to 7pm", sun: "12pm to 7pm" };

const CURRY_KITCHEN_HOURS: HoursTable =
    HoursTable { mon_thu: "11am to 8pm", fri: "11am to 8pm", sat: CLOSED, sun: CLOSED };

const JASMINE_STALLS: &[Stall] = &[
    Stall { name: "Cafetasia Chinese", menu_type: "cafetasia-chinese", daily: false, hours: None },
    Stall { name: "Curry Kitchen", menu_type: "curry-kitchen", daily: true, hours: Some(CURRY_KITCHEN_HOURS) },
    Stall { name: "Cafetasia Korean", menu_type: "cafetasia-korean", daily: false, hours: None },
    Stall { name: "Sushido", menu_type: "sushido", daily: false, hours: None },
];

static VENUES: Lazy<Vec<Venue>> = Lazy::new(|| {
    vec![
        Venue {
            slug: "east",
            label: "East Side Dining (Dine-in Specials)",
            file_name: "east_dining.json",
            kind: VenueKind::Meals {
                feed: Feed { school: "east-side-dining", menu_type: "todays-dine-in-specials-esd" },
                rules: meal::dine_in(),
            },
        },
        Venue {
            slug: "west",
            label: "West Side Dining (Dine-in Specials)",
            file_name: "west_dining.json",
            kind: VenueKind::Meals {
                feed: Feed { school: "west-side-dining", menu_type: "todays-dine-in-specials-wsd" },
                rules: meal::dine_in(),
            },
        },
        Venue {
            slug: "jasmine",
            label: "Jasmine",
            file_name: "jasmine.json",
            kind: VenueKind::Stalls(StallTable {
                school: "jasmine",
                stalls: JASMINE_STALLS,
                hours: JASMINE_HOURS,
                pinned_date: NaiveDate::from_ymd_opt(2026, 1, 26),
                menu_url: "https://stonybrook.nutrislice.com/menu/jasmine/{slug}/{date}",
            }),
        },
        Venue {
            slug: "dental",
            label: "Dental Cafe",
            file_name: "dental_cafe.json",
            kind: VenueKind::Flat { feed: Feed { school: "sbu-eats-events", menu_type: "dental-cafe" } },
        },
    ]
});

pub fn venues() -> &'static [Venue] {
    &VENUES
}

/// Look up a venue by slug (case-insensitive).
pub fn find_venue(slug: &str) -> Option<&'static Venue> {
    let slug = slug.trim();
    VENUES.iter().find(|v| v.slug.eq_ignore_ascii_case(slug))
}
