use covid_tracker::models::{CountrySummary, GlobalSummary};
use covid_tracker::summary::{render_country, render_global};

#[test]
fn global_block_layout() {
    let sample = r#"
    {
      "updated": 1600000000000,
      "cases": 29000000,
      "todayCases": 250000,
      "deaths": 925000,
      "todayDeaths": 4000,
      "recovered": 20000000,
      "active": 8000000,
      "critical": 61000
    }
    "#;
    let g: GlobalSummary = serde_json::from_str(sample).unwrap();
    let text = render_global(&g);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Global summary:");
    assert_eq!(lines[1], "  Updated: 2020-09-13 12:26:40 UTC");
    assert_eq!(lines[2], "  Cases: 29,000,000");
    assert_eq!(lines[3], "  Today Cases: 250,000");
    assert_eq!(lines.last(), Some(&"  Critical: 61,000"));
}

#[test]
fn country_block_combines_today_counters() {
    let c = CountrySummary {
        country: "India".into(),
        cases: 11_000_000,
        today_cases: 15_000,
        deaths: 156_000,
        today_deaths: 100,
        tests: 210_000_000,
        population: 1_380_000_000,
        ..Default::default()
    };
    let text = render_country(&c);
    assert!(text.starts_with("India summary:"));
    assert!(text.contains("  Cases: 11,000,000 (Today: 15,000)"));
    assert!(text.contains("  Deaths: 156,000 (Today: 100)"));
    assert!(text.contains("  Population: 1,380,000,000"));
}

#[test]
fn partial_payload_renders_zeros() {
    let c: CountrySummary = serde_json::from_str(r#"{"country":"Atlantis","cases":7}"#).unwrap();
    let text = render_country(&c);
    assert!(text.contains("  Cases: 7 (Today: 0)"));
    assert!(text.contains("  Tests: 0"));
}
