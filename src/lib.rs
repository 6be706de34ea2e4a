//! covid_tracker
//!
//! A lightweight Rust library for retrieving, summarizing, and charting
//! COVID-19 statistics from the public [disease.sh](https://disease.sh) API.
//! Pairs with the `covid` CLI.
//!
//! ### Features
//! - Fetch the global snapshot, a single-country snapshot, and a country's
//!   historical case timeline
//! - Render summaries as human-readable text blocks
//! - Derive daily new cases and a 7-day trailing average from the cumulative
//!   series and plot both, to a PNG/SVG file or an interactive window
//!
//! ### Example
//! ```no_run
//! use covid_tracker::{Client, HistoryWindow};
//! use covid_tracker::{series::DailySeries, summary, viz};
//!
//! let client = Client::default();
//! let global = client.global_summary()?;
//! println!("{}", summary::render_global(&global));
//!
//! let hist = client.country_historical("India", HistoryWindow::Days(180))?;
//! let (label, timeline) = hist.into_parts();
//! let series = DailySeries::from_timeline(&timeline, label.as_deref().unwrap_or("India"))?;
//! viz::plot_to_file(&series, "india.png", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod display;
pub mod models;
pub mod series;
pub mod summary;
pub mod viz;

pub use api::Client;
pub use models::{CountrySummary, GlobalSummary, HistoricalResponse, HistoryWindow, Timeline};
pub use series::{DailyPoint, DailySeries, SeriesError};
