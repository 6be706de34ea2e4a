use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many trailing days of history to request.
///
/// The upstream API maps `lastdays=all` to the entire series; the CLI maps a
/// zero or negative `--days` to [`HistoryWindow::All`] (an upstream
/// convention, not a choice made here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryWindow {
    /// A fixed trailing window, e.g. the last 365 days.
    Days(u32),
    /// The entire available history (`lastdays=all`).
    All,
}

impl HistoryWindow {
    pub fn to_query_param(&self) -> String {
        match *self {
            HistoryWindow::Days(n) => n.to_string(),
            HistoryWindow::All => "all".to_string(),
        }
    }
}

/// Current worldwide snapshot from `GET /all`.
///
/// Counters are missing-safe: any key absent from the response deserializes
/// to 0 instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    /// Epoch milliseconds of the last upstream refresh.
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub today_cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub critical: u64,
}

/// Current single-country snapshot from `GET /countries/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub today_cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub tests: u64,
    #[serde(default)]
    pub population: u64,
}

/// Named cumulative curves keyed by `"M/D/YY"` date strings.
///
/// Key order is not meaningful; consumers must sort by parsed date (see
/// [`crate::series`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub cases: HashMap<String, u64>,
    #[serde(default)]
    pub deaths: HashMap<String, u64>,
    #[serde(default)]
    pub recovered: HashMap<String, u64>,
}

/// Response of `GET /historical/{name}`.
///
/// The upstream API answers per-country queries with
/// `{"country": ..., "timeline": {...}}` but returns the bare timeline object
/// for aggregate queries. This enum is the one place that inconsistency is
/// absorbed; everything downstream works on [`Timeline`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoricalResponse {
    Nested {
        #[serde(default)]
        country: Option<String>,
        timeline: Timeline,
    },
    Bare(Timeline),
}

impl HistoricalResponse {
    /// Normalize either response shape into `(country label, timeline)`.
    pub fn into_parts(self) -> (Option<String>, Timeline) {
        match self {
            HistoricalResponse::Nested { country, timeline } => (country, timeline),
            HistoricalResponse::Bare(timeline) => (None, timeline),
        }
    }
}
