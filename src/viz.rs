//! Chart rendering: daily new cases plus the 7-day average as a two-series
//! line chart, written to **PNG**/**SVG** or into an RGB buffer for the
//! interactive viewer.

use crate::series::DailySeries;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use std::path::Path;

/// First two entries of the Microsoft Office chart palette.
const DAILY_COLOR: RGBColor = RGBColor(68, 114, 196); // blue   (#4472C4)
const AVG_COLOR: RGBColor = RGBColor(237, 125, 49); //   orange (#ED7D31)

/// Pick a single Y-axis scale and its human label based on magnitude.
/// Returns (scale, label), e.g. `(1e6, "millions")`.
fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else if max_abs >= 1.0e5 {
        (1.0e3, "thousands")
    } else {
        (1.0, "")
    }
}

/// Render the chart to a file. The extension picks the backend: `.svg` uses
/// the SVG backend, anything else the bitmap backend (PNG).
pub fn plot_to_file<P: AsRef<Path>>(
    series: &DailySeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series)?;
    }
    Ok(())
}

/// Render the chart into an RGB888 buffer of `width * height * 3` bytes,
/// for display sinks that want pixels instead of a file.
pub fn render_rgb(series: &DailySeries, width: u32, height: u32) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_chart(root, series)?;
    }
    Ok(buf)
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, series: &DailySeries) -> Result<()>
where
    DB: DrawingBackend,
{
    if series.points.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (mut x_min, mut x_max) = (
        series.points[0].date,
        series.points[series.points.len() - 1].date,
    );
    if x_min == x_max {
        // single observation: widen so the axis has extent
        x_min = x_min.pred_opt().unwrap_or(x_min);
        x_max = x_max.succ_opt().unwrap_or(x_max);
    }

    let mut min_val = 0.0f64;
    let mut max_val = f64::NEG_INFINITY;
    for p in &series.points {
        min_val = min_val.min(p.new_cases).min(p.avg_7d);
        max_val = max_val.max(p.new_cases).max(p.avg_7d);
    }
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    let pad = (max_val - min_val) * 0.05;
    let max_val = max_val + pad;

    let (yscale, scale_word) = choose_axis_scale(min_val.abs().max(max_val.abs()));
    let y_axis_title = if scale_word.is_empty() {
        "New cases".to_string()
    } else {
        format!("New cases ({scale_word})")
    };

    let x_label_fmt = |d: &NaiveDate| d.format("%Y-%m-%d").to_string();
    let y_label_fmt = move |v: &f64| {
        if yscale == 1.0 {
            (v.round() as i64).to_formatted_string(&Locale::en)
        } else {
            let a = v.abs();
            let prec = if a >= 100.0 {
                0
            } else if a >= 10.0 {
                1
            } else {
                2
            };
            format!("{:.*}", prec, *v)
        }
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(
            format!("Daily new COVID-19 cases — {}", series.country),
            (FontFamily::SansSerif, 24),
        )
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(x_min..x_max, (min_val / yscale)..(max_val / yscale))
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_axis_title)
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let daily: Vec<(NaiveDate, f64)> = series
        .points
        .iter()
        .map(|p| (p.date, p.new_cases / yscale))
        .collect();
    let avg: Vec<(NaiveDate, f64)> = series
        .points
        .iter()
        .map(|p| (p.date, p.avg_7d / yscale))
        .collect();

    for (points, color, label, stroke) in [
        (daily, DAILY_COLOR, "Daily new cases", 2u32),
        (avg, AVG_COLOR, "7-day average", 3u32),
    ] {
        let style = ShapeStyle {
            color: color.to_rgba(),
            filled: false,
            stroke_width: stroke,
        };
        chart
            .draw_series(LineSeries::new(points, style))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(label)
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + Circle::new((x + 8, y), 4, color.to_rgba().filled())
                    + Text::new(label.to_string(), (x + 20, y), (FontFamily::SansSerif, 14))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
