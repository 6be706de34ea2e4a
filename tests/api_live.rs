//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use covid_tracker::series::DailySeries;
use covid_tracker::{Client, HistoryWindow};

#[test]
fn fetch_global() {
    let cli = Client::default();
    let g = cli.global_summary().unwrap();
    assert!(g.cases > 0);
    assert!(g.updated > 0);
}

#[test]
fn fetch_country_and_history() {
    let cli = Client::default();
    let c = cli.country_summary("India").unwrap();
    assert_eq!(c.country, "India");
    assert!(c.population > 0);

    let hist = cli
        .country_historical("India", HistoryWindow::Days(30))
        .unwrap();
    let (label, timeline) = hist.into_parts();
    let series = DailySeries::from_timeline(&timeline, label.as_deref().unwrap_or("India")).unwrap();
    assert!(!series.points.is_empty());
    // Ascending dates after the sort.
    assert!(series.points.windows(2).all(|w| w[0].date < w[1].date));
}
