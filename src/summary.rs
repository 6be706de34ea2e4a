//! Pure text formatters for the global and per-country snapshots.
//!
//! Numbers are grouped with thousands separators; the `updated` field
//! (epoch milliseconds) renders as a UTC timestamp. Formatters never fail:
//! absent upstream fields already defaulted to 0 during deserialization, and
//! an out-of-range timestamp falls back to the Unix epoch.

use crate::models::{CountrySummary, GlobalSummary};
use chrono::DateTime;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write;

fn grouped(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn updated_utc(epoch_millis: i64) -> String {
    DateTime::from_timestamp_millis(epoch_millis)
        .unwrap_or_else(|| DateTime::from_timestamp_millis(0).unwrap())
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

/// Render the worldwide snapshot as a multi-line block.
pub fn render_global(data: &GlobalSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Global summary:");
    let _ = writeln!(out, "  Updated: {}", updated_utc(data.updated));
    let _ = writeln!(out, "  Cases: {}", grouped(data.cases));
    let _ = writeln!(out, "  Today Cases: {}", grouped(data.today_cases));
    let _ = writeln!(out, "  Deaths: {}", grouped(data.deaths));
    let _ = writeln!(out, "  Today Deaths: {}", grouped(data.today_deaths));
    let _ = writeln!(out, "  Recovered: {}", grouped(data.recovered));
    let _ = writeln!(out, "  Active: {}", grouped(data.active));
    let _ = write!(out, "  Critical: {}", grouped(data.critical));
    out
}

/// Render a single-country snapshot as a multi-line block.
pub fn render_country(data: &CountrySummary) -> String {
    let country = if data.country.is_empty() {
        "Unknown"
    } else {
        &data.country
    };
    let mut out = String::new();
    let _ = writeln!(out, "{country} summary:");
    let _ = writeln!(out, "  Updated: {}", updated_utc(data.updated));
    let _ = writeln!(
        out,
        "  Cases: {} (Today: {})",
        grouped(data.cases),
        grouped(data.today_cases)
    );
    let _ = writeln!(
        out,
        "  Deaths: {} (Today: {})",
        grouped(data.deaths),
        grouped(data.today_deaths)
    );
    let _ = writeln!(out, "  Recovered: {}", grouped(data.recovered));
    let _ = writeln!(out, "  Active: {}", grouped(data.active));
    let _ = writeln!(out, "  Tests: {}", grouped(data.tests));
    let _ = write!(out, "  Population: {}", grouped(data.population));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_and_timestamp() {
        let g = GlobalSummary {
            updated: 1_600_000_000_000,
            cases: 1_234_567,
            ..Default::default()
        };
        let text = render_global(&g);
        assert!(text.contains("Cases: 1,234,567"));
        assert!(text.contains("Updated: 2020-09-13 12:26:40 UTC"));
    }

    #[test]
    fn defaults_render_as_zero_not_panic() {
        let text = render_country(&CountrySummary::default());
        assert!(text.starts_with("Unknown summary:"));
        assert!(text.contains("Tests: 0"));
        assert!(text.contains("Updated: 1970-01-01 00:00:00 UTC"));
    }
}
