//! Time-series transformer: turn a cumulative-case timeline into daily new
//! cases plus a 7-day trailing average, sorted by calendar date.

use crate::models::Timeline;
use chrono::NaiveDate;
use thiserror::Error;

/// Date keys as the historical endpoint writes them, e.g. `1/22/20`.
const DATE_FMT: &str = "%m/%d/%y";

/// Failures specific to timeline transformation, distinct from fetch errors
/// so callers can tell "the API call worked but the data is unusable" apart
/// from transport problems.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("historical timeline has no 'cases' series")]
    MissingCases,
    #[error("invalid date key {key:?} in timeline: {source}")]
    BadDate {
        key: String,
        source: chrono::ParseError,
    },
}

/// One derived observation.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// First difference of the cumulative count; 0 for the first point.
    /// Signed because upstream corrections can lower the cumulative total.
    pub new_cases: f64,
    /// Trailing mean over up to 7 points ending here (shrinking window at
    /// the start of the series).
    pub avg_7d: f64,
}

/// Daily new cases and their 7-day average for one country, sorted ascending
/// by date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub country: String,
    pub points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Derive the daily series from a cumulative timeline.
    ///
    /// Steps: take the `cases` curve (absent/empty is an error), parse every
    /// `M/D/YY` key, sort by date, difference consecutive cumulative values
    /// (first delta defined as 0), then apply the rolling mean.
    pub fn from_timeline(timeline: &Timeline, country: &str) -> Result<Self, SeriesError> {
        if timeline.cases.is_empty() {
            return Err(SeriesError::MissingCases);
        }

        let cumulative = sort_by_date(&timeline.cases)?;
        let deltas = daily_new(&cumulative);
        let averages = rolling_mean(&deltas, 7);

        let points = cumulative
            .iter()
            .zip(deltas.iter().zip(averages.iter()))
            .map(|(&(date, _), (&new_cases, &avg_7d))| DailyPoint {
                date,
                new_cases,
                avg_7d,
            })
            .collect();

        Ok(Self {
            country: country.to_string(),
            points,
        })
    }
}

/// Parse the date keys and return `(date, cumulative)` pairs sorted
/// ascending. Input order is irrelevant; keys are unique so there are no
/// ties.
pub fn sort_by_date(
    curve: &std::collections::HashMap<String, u64>,
) -> Result<Vec<(NaiveDate, u64)>, SeriesError> {
    let mut out: Vec<(NaiveDate, u64)> = Vec::with_capacity(curve.len());
    for (key, &value) in curve {
        let date =
            NaiveDate::parse_from_str(key, DATE_FMT).map_err(|source| SeriesError::BadDate {
                key: key.clone(),
                source,
            })?;
        out.push((date, value));
    }
    out.sort_by_key(|&(date, _)| date);
    Ok(out)
}

/// First difference of the cumulative counts. `delta[0] == 0` (no prior
/// day), `delta[i] == c[i] - c[i-1]` for `i > 0`.
pub fn daily_new(cumulative: &[(NaiveDate, u64)]) -> Vec<f64> {
    cumulative
        .iter()
        .enumerate()
        .map(|(i, &(_, c))| {
            if i == 0 {
                0.0
            } else {
                c as f64 - cumulative[i - 1].1 as f64
            }
        })
        .collect()
}

/// Trailing mean over up to `window` points ending at each position, with a
/// minimum window of 1 at the start of the series.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = i.saturating_sub(window - 1);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn first_delta_is_zero_and_differences_match() {
        let cumulative: Vec<(NaiveDate, u64)> = [10u64, 10, 12, 15]
            .iter()
            .enumerate()
            .map(|(i, &c)| (date(i as u32 + 1), c))
            .collect();
        assert_eq!(daily_new(&cumulative), vec![0.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn rolling_mean_shrinks_at_start() {
        let deltas = [4.0, 2.0, 6.0];
        let avg = rolling_mean(&deltas, 7);
        assert_eq!(avg[0], 4.0);
        assert_eq!(avg[1], 3.0);
        assert_eq!(avg[2], 4.0);
    }

    #[test]
    fn negative_corrections_pass_through() {
        let cumulative = vec![(date(1), 100u64), (date(2), 90)];
        assert_eq!(daily_new(&cumulative), vec![0.0, -10.0]);
    }
}
