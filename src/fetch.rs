//! Menu feed sources.
//!
//! The upstream API serves one week per request:
//!
//! ```text
//! GET {base}/menu/api/weeks/school/{school}/menu-type/{menu_type}/{YYYY}/{MM}/{DD}/?format=json
//! { "days": [ { "date": "YYYY-MM-DD", "menu_items": [ ... ] }, ... ] }
//! ```
//!
//! One attempt per request. Callers turn errors into a report status.

use crate::rules::venues::Feed;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://stonybrook.api.nutrislice.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (SBU Student Project)";
pub const TIMEOUT: Duration = Duration::from_secs(25);

/// A week of menus as returned by the API. Missing or null fields decode as
/// empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekMenu {
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<DayMenu>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayMenu {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub menu_items: Vec<Value>,
}

impl WeekMenu {
    /// Records for `date`, or `None` when the week has no such day.
    pub fn day(&self, date: &str) -> Option<&[Value]> {
        self.days.iter().find(|d| d.date.as_deref() == Some(date)).map(|d| d.menu_items.as_slice())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where week menus come from.
pub trait MenuSource {
    fn fetch_week(&self, feed: &Feed, date: NaiveDate) -> Result<WeekMenu>;

    /// Human-readable location of the feed, recorded in reports.
    fn describe(&self, feed: &Feed, date: NaiveDate) -> String;
}

pub fn week_url(base: &str, feed: &Feed, date: NaiveDate) -> String {
    format!(
        "{base}/menu/api/weeks/school/{}/menu-type/{}/{}/{:02}/{:02}/?format=json",
        feed.school,
        feed.menu_type,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Blocking HTTP source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base: String,
}

impl HttpSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).user_agent(user_agent).build()?;
        Ok(Self { client, base: API_BASE.to_string() })
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into().trim_end_matches('/').to_string();
        self
    }
}

impl MenuSource for HttpSource {
    fn fetch_week(&self, feed: &Feed, date: NaiveDate) -> Result<WeekMenu> {
        let url = week_url(&self.base, feed, date);
        tracing::info!(%url, "fetching menu");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self, feed: &Feed, date: NaiveDate) -> String {
        week_url(&self.base, feed, date)
    }
}

/// Reads a saved API response from disk. Every feed resolves to the same file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for FileSource {
    fn fetch_week(&self, _feed: &Feed, _date: NaiveDate) -> Result<WeekMenu> {
        tracing::info!(path = %self.path.display(), "reading menu");
        let body = std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self, _feed: &Feed, _date: NaiveDate) -> String {
        format!("file://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn week_url_zero_pads_month_and_day() {
        let feed = Feed { school: "east-side-dining", menu_type: "todays-dine-in-specials-esd" };
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            week_url(API_BASE, &feed, date),
            "https://stonybrook.api.nutrislice.com/menu/api/weeks/school/east-side-dining/menu-type/todays-dine-in-specials-esd/2026/03/07/?format=json"
        );
    }

    #[test]
    fn week_menu_tolerates_missing_and_null_fields() {
        let week: WeekMenu = serde_json::from_value(json!({
            "start_date": "2026-01-25",
            "days": [
                {"date": "2026-01-26", "menu_items": null},
                {"date": "2026-01-27", "menu_items": [{"text": "Grill"}]},
                {"menu_items": [{"text": "orphan"}]},
            ],
        }))
        .unwrap();

        assert_eq!(week.day("2026-01-26"), Some(&[][..]));
        assert_eq!(week.day("2026-01-27").map(<[Value]>::len), Some(1));
        assert_eq!(week.day("2026-01-28"), None);

        let empty: WeekMenu = serde_json::from_value(json!({"days": null})).unwrap();
        assert!(empty.days.is_empty());
    }

    #[test]
    fn file_source_reads_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week.json");
        std::fs::write(&path, r#"{"days":[{"date":"2026-01-27","menu_items":[]}]}"#).unwrap();

        let source = FileSource::new(&path);
        let feed = Feed { school: "x", menu_type: "y" };
        let date = NaiveDate::from_ymd_opt(2026, 1, 27).unwrap();
        let week = source.fetch_week(&feed, date).unwrap();
        assert_eq!(week.days.len(), 1);

        let missing = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(missing.fetch_week(&feed, date), Err(Error::Io { .. })));
    }

    mod http {
        use super::*;
        use crate::{Context, Report, Status, find_venue, run_venue};
        use tokio::runtime::Runtime;
        use wiremock::matchers::{header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        const EAST_WEEK: &str =
            "/menu/api/weeks/school/east-side-dining/menu-type/todays-dine-in-specials-esd/2026/01/27/";

        fn east() -> Feed {
            Feed { school: "east-side-dining", menu_type: "todays-dine-in-specials-esd" }
        }

        fn tuesday() -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()
        }

        /// Serves `response` for the east week URL, but only to requests that
        /// carry the project user agent. The blocking client stays off the
        /// runtime.
        fn serve(response: ResponseTemplate) -> (Runtime, MockServer) {
            let runtime = Runtime::new().unwrap();
            let server = runtime.block_on(MockServer::start());
            runtime.block_on(
                Mock::given(method("GET"))
                    .and(path(EAST_WEEK))
                    .and(query_param("format", "json"))
                    .and(header("user-agent", USER_AGENT))
                    .respond_with(response)
                    .mount(&server),
            );
            (runtime, server)
        }

        fn source(server: &MockServer) -> HttpSource {
            HttpSource::new(TIMEOUT, USER_AGENT).unwrap().with_base(format!("{}/", server.uri()))
        }

        #[test]
        fn requests_week_url_with_user_agent() {
            let body = json!({"days": [{"date": "2026-01-27", "menu_items": [{"text": "Grill"}]}]});
            let (runtime, server) = serve(ResponseTemplate::new(200).set_body_json(body));
            let source = source(&server);

            let week = source.fetch_week(&east(), tuesday()).unwrap();
            assert_eq!(week.day("2026-01-27").map(<[Value]>::len), Some(1));
            assert_eq!(source.describe(&east(), tuesday()), format!("{}{EAST_WEEK}?format=json", server.uri()));

            let requests = runtime.block_on(server.received_requests()).unwrap();
            assert_eq!(requests.len(), 1);
            let agent = requests[0].headers.get("user-agent").and_then(|v| v.to_str().ok());
            assert_eq!(agent, Some(USER_AGENT));
        }

        #[test]
        fn non_success_status_is_an_error() {
            let (_runtime, server) = serve(ResponseTemplate::new(500));

            match source(&server).fetch_week(&east(), tuesday()) {
                Err(Error::Status { url, status }) => {
                    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                    assert!(url.starts_with(&server.uri()), "{url}");
                }
                other => panic!("expected status error, got {other:?}"),
            }
        }

        #[test]
        fn malformed_body_is_a_json_error() {
            let (_runtime, server) = serve(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"));
            let result = source(&server).fetch_week(&east(), tuesday());
            assert!(matches!(result, Err(Error::Json(_))), "{result:?}");
        }

        #[test]
        fn server_error_becomes_fetch_error_report() {
            let (_runtime, server) = serve(ResponseTemplate::new(503));
            let venue = find_venue("east").unwrap();

            let Report::Menu(report) = run_venue(venue, &source(&server), &Context::default()) else {
                panic!("expected menu report");
            };
            assert_eq!(report.status, Status::FetchError);
            assert!(report.message.starts_with("Error fetching menu: HTTP 503"), "{}", report.message);
            assert_eq!(report.meals.item_count(), 0);
        }
    }
}
