//! Service-day resolution.
//!
//! Everything downstream keys off the calendar day in New York: the API date,
//! weekday vs. weekend rules, and the hours table.

use crate::{Error, Result, Schedule};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

pub const TIMEZONE: &str = "America/New_York";

/// Key into an hours-of-operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoursKey {
    MonThu,
    Fri,
    Sat,
    Sun,
}

impl HoursKey {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => HoursKey::MonThu,
            Weekday::Fri => HoursKey::Fri,
            Weekday::Sat => HoursKey::Sat,
            Weekday::Sun => HoursKey::Sun,
        }
    }
}

/// Run context.
///
/// Holds the reference instant that picks "today" for every venue in a run.
#[derive(Debug, Clone)]
pub struct Context {
    pub now: DateTime<Tz>,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // Tuesday, so tests default to weekday rules.
            Utc.with_ymd_and_hms(2026, 1, 27, 14, 30, 0).single().map(Self::from_utc).unwrap_or_else(Self::now)
        } else {
            Self::now()
        }
    }
}

impl Context {
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { now: utc.with_timezone(&New_York) }
    }

    /// Noon in New York on `date`.
    pub fn on_date(date: NaiveDate) -> Option<Self> {
        let noon = date.and_hms_opt(12, 0, 0)?;
        New_York.from_local_datetime(&noon).earliest().map(|now| Self { now })
    }

    /// Pin the service day from user input, relative to `self`.
    ///
    /// Accepts `YYYY-MM-DD` or an English expression (`tomorrow`,
    /// `next saturday`).
    pub fn with_date_expr(&self, expr: &str) -> Result<Self> {
        let expr = expr.trim();
        let date = match NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => chrono_english::parse_date_string(expr, self.now.fixed_offset(), chrono_english::Dialect::Us)
                .map_err(|_| Error::InvalidDate(expr.to_string()))?
                .date_naive(),
        };
        Self::on_date(date).ok_or_else(|| Error::InvalidDate(expr.to_string()))
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// `YYYY-MM-DD`, as used by the API's `days[].date`.
    pub fn date(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.now.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::from_weekend(self.is_weekend())
    }

    pub fn hours_key(&self) -> HoursKey {
        HoursKey::from_weekday(self.now.weekday())
    }

    pub fn updated_at(&self) -> String {
        self.now.format("%Y-%m-%d %H:%M:%S %Z").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_a_weekday() {
        let ctx = Context::default();
        assert_eq!(ctx.date(), "2026-01-27");
        assert!(!ctx.is_weekend());
        assert_eq!(ctx.schedule(), Schedule::Weekday);
        assert_eq!(ctx.hours_key(), HoursKey::MonThu);
        assert_eq!(ctx.updated_at(), "2026-01-27 09:30:00 EST");
    }

    #[test]
    fn late_utc_evening_rolls_back_to_new_york_day() {
        // 03:00 UTC Sunday is 22:00 EST Saturday.
        let ctx = Context::from_utc(Utc.with_ymd_and_hms(2026, 2, 1, 3, 0, 0).unwrap());
        assert_eq!(ctx.date(), "2026-01-31");
        assert!(ctx.is_weekend());
        assert_eq!(ctx.hours_key(), HoursKey::Sat);
    }

    #[test]
    fn summer_dates_report_daylight_time() {
        let ctx = Context::on_date(NaiveDate::from_ymd_opt(2026, 7, 3).unwrap()).unwrap();
        assert_eq!(ctx.hours_key(), HoursKey::Fri);
        assert_eq!(ctx.updated_at(), "2026-07-03 12:00:00 EDT");
    }

    #[test]
    fn date_expressions_accept_iso_and_english() {
        let ctx = Context::default();
        assert_eq!(ctx.with_date_expr("2026-10-17").unwrap().date(), "2026-10-17");
        assert_eq!(ctx.with_date_expr("tomorrow").unwrap().date(), "2026-01-28");
        assert!(matches!(ctx.with_date_expr("not a date at all"), Err(Error::InvalidDate(_))));
    }
}
