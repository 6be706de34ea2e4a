use anyhow::Result;
use clap::Parser;
use covid_tracker::{display, series::DailySeries, summary, viz};
use covid_tracker::{Client, HistoryWindow};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covid",
    version,
    about = "Fetch, summarize & chart COVID-19 statistics from disease.sh"
)]
struct Cli {
    /// Country name (e.g. India or "United States"); resolved strictly by
    /// the API.
    #[arg(short, long)]
    country: Option<String>,
    /// Historical window in days for the plot. Zero or negative requests the
    /// entire history (an upstream API convention).
    #[arg(short, long, default_value_t = 365, allow_negative_numbers = true)]
    days: i64,
    /// Save the chart to this file (.png or .svg) instead of opening a
    /// window.
    #[arg(short = 's', long)]
    saveplot: Option<PathBuf>,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn make_client() -> Client {
    match std::env::var("COVID_API_BASE") {
        Ok(base) if !base.trim().is_empty() => Client::with_base_url(base.trim()),
        _ => Client::default(),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let client = make_client();

    // Global summary failures are fatal; everything after is best-effort.
    match client.global_summary() {
        Ok(global) => println!("\n{}", summary::render_global(&global)),
        Err(e) => {
            eprintln!("Failed to fetch global summary: {e:#}");
            std::process::exit(1);
        }
    }

    let Some(country) = cli.country.as_deref() else {
        println!("\nNo country specified. To view country details and plot, run with --country \"India\"");
        return;
    };

    match client.country_summary(country) {
        Ok(data) => println!("\n{}", summary::render_country(&data)),
        Err(e) => {
            eprintln!("\nError fetching country summary for '{country}': {e:#}");
            return;
        }
    }

    let window = if cli.days <= 0 {
        HistoryWindow::All
    } else {
        HistoryWindow::Days(cli.days as u32)
    };

    if let Err(e) = fetch_and_plot(&client, country, window, &cli) {
        eprintln!("Could not fetch or plot historical data: {e:#}");
    }
}

fn fetch_and_plot(
    client: &Client,
    country: &str,
    window: HistoryWindow,
    cli: &Cli,
) -> Result<()> {
    let hist = client.country_historical(country, window)?;
    let (label, timeline) = hist.into_parts();
    let label = label.as_deref().unwrap_or(country);
    let series = DailySeries::from_timeline(&timeline, label)?;

    match cli.saveplot.as_ref() {
        Some(path) => {
            viz::plot_to_file(&series, path, cli.width, cli.height)?;
            println!("Saved plot to: {}", path.display());
        }
        None => display::show(&series, cli.width, cli.height)?,
    }
    Ok(())
}
