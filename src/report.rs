//! Output documents, one shape per venue kind.

use crate::MealDocument;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NoDataToday,
    FetchError,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::NoDataToday => "no_data_today",
            Status::FetchError => "fetch_error",
        }
    }
}

/// Meal-partitioned venue report.
#[derive(Debug, Clone, Serialize)]
pub struct MenuReport {
    pub date: String,
    pub location: String,
    pub is_weekend: bool,
    pub status: Status,
    pub message: String,
    pub updated_at: String,
    pub timezone: String,
    pub meals: MealDocument,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StallSection {
    pub section: String,
    pub hours_today: String,
    pub items: Vec<String>,
    pub menu_url: String,
}

/// Per-stall venue report.
#[derive(Debug, Clone, Serialize)]
pub struct StallReport {
    pub date: String,
    pub location: String,
    pub hours_today: String,
    pub updated_at: String,
    pub timezone: String,
    pub sections: Vec<StallSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatItem {
    pub name: String,
    pub price: Value,
}

/// Flat item-list venue report.
#[derive(Debug, Clone, Serialize)]
pub struct FlatReport {
    pub date: String,
    pub location: String,
    pub status: Status,
    pub message: String,
    pub menu: Vec<FlatItem>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Menu(MenuReport),
    Stalls(StallReport),
    Flat(FlatReport),
}

impl Report {
    pub fn location(&self) -> &str {
        match self {
            Report::Menu(r) => &r.location,
            Report::Stalls(r) => &r.location,
            Report::Flat(r) => &r.location,
        }
    }
}
