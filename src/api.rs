//! Synchronous client for the **disease.sh COVID-19 API (v3)**.
//!
//! Three read-only operations: the global snapshot (`/all`), a strict-match
//! country snapshot (`/countries/{name}`), and a country's historical
//! timeline (`/historical/{name}`). No retries and no caching; any transport
//! failure or non-2xx status surfaces as an error naming the operation and
//! URL with the underlying cause attached.
//!
//! Typical usage:
//! ```no_run
//! # use covid_tracker::{Client, HistoryWindow};
//! let client = Client::default();
//! let global = client.global_summary()?;
//! let india = client.country_summary("India")?;
//! let hist = client.country_historical("India", HistoryWindow::All)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{CountrySummary, GlobalSummary, HistoricalResponse, HistoryWindow};
use anyhow::{bail, Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default API root. Override `base_url` to point at a mirror or a test
/// server.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh/v3/covid-19";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(10)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("covid_tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            http,
        }
    }
}

// Allow -, _, . unescaped; spaces in names like "United States" become %20.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment.trim(), SAFE).to_string()
}

impl Client {
    /// Build a client against a non-default base URL (test servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the current worldwide snapshot (`GET {base}/all`).
    pub fn global_summary(&self) -> Result<GlobalSummary> {
        let url = format!("{}/all", self.base_url);
        self.get_json(&url)
            .with_context(|| format!("fetch global summary (GET {url})"))
    }

    /// Fetch the current snapshot for a single country
    /// (`GET {base}/countries/{name}?strict=true`).
    ///
    /// `strict=true` requests exact-match name resolution; the server is the
    /// authority on how names map to countries.
    pub fn country_summary(&self, name: &str) -> Result<CountrySummary> {
        let url = format!("{}/countries/{}?strict=true", self.base_url, enc(name));
        self.get_json(&url)
            .with_context(|| format!("fetch summary for {name:?} (GET {url})"))
    }

    /// Fetch a country's historical timeline
    /// (`GET {base}/historical/{name}?lastdays={n|all}`).
    ///
    /// The response shape varies upstream; see
    /// [`HistoricalResponse::into_parts`] for normalization.
    pub fn country_historical(
        &self,
        name: &str,
        window: HistoryWindow,
    ) -> Result<HistoricalResponse> {
        let url = format!(
            "{}/historical/{}?lastdays={}",
            self.base_url,
            enc(name),
            window.to_query_param()
        );
        self.get_json(&url)
            .with_context(|| format!("fetch historical data for {name:?} (GET {url})"))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send().context("network error")?;
        let status = resp.status();
        if !status.is_success() {
            bail!("request failed with HTTP {status}");
        }
        let body = resp.text().context("read response body")?;
        serde_json::from_str(&body).context("decode json")
    }
}
