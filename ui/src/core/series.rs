//! Glucose time-series aggregation: readings, day boundaries and per-day stats.
//!
//! This is the only first-party data logic in the app. One forward pass over
//! the raw CSV rows produces (a) the readings in input order, each tagged with
//! its calendar-day key and a marker on the last reading before a day change,
//! and (b) per-day peak/low/average statistics in first-seen-day order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{macros::format_description, PrimitiveDateTime};

use super::ingest::RawRow;

/// One parsed glucose measurement.
///
/// `day` is always the calendar-date portion of `timestamp`; `day_boundary` is
/// true on the last reading of a day when another day follows it, which is
/// where the chart draws its separator line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: String,
    pub glucose: f64,
    pub day: String,
    pub day_boundary: bool,
}

/// Aggregated peak/low/average for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub day: String,
    pub peak: f64,
    pub low: f64,
    pub average: f64,
}

/// The brush extent, as day keys. Display-only state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedRange {
    pub start: String,
    pub end: String,
}

/// Everything the chart, brush and table consume, rebuilt per upload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlucoseSeries {
    pub readings: Vec<Reading>,
    pub daily: Vec<DailyStats>,
}

impl GlucoseSeries {
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Running accumulator for one day key.
struct DayAccum {
    day: String,
    peak: f64,
    low: f64,
    sum: f64,
    count: u32,
}

/// Aggregate raw CSV rows into an annotated reading sequence plus per-day
/// statistics.
///
/// Rows that don't carry a parseable `YYYY-MM-DD HH:MM[:SS]` timestamp and a
/// numeric value are skipped without aborting the pass. Daily stats come out
/// in first-seen-day order; readings keep input order.
pub fn aggregate(rows: &[RawRow]) -> GlucoseSeries {
    let mut readings: Vec<Reading> = Vec::new();
    let mut accums: Vec<DayAccum> = Vec::new();
    let mut day_index: HashMap<String, usize> = HashMap::new();
    let mut previous_day: Option<String> = None;

    for row in rows {
        let Some((timestamp, glucose, day)) = parse_row(row) else {
            continue;
        };

        match day_index.get(&day) {
            Some(&idx) => {
                let accum = &mut accums[idx];
                accum.peak = accum.peak.max(glucose);
                accum.low = accum.low.min(glucose);
                accum.sum += glucose;
                accum.count += 1;
            }
            None => {
                day_index.insert(day.clone(), accums.len());
                accums.push(DayAccum {
                    day: day.clone(),
                    peak: glucose,
                    low: glucose,
                    sum: glucose,
                    count: 1,
                });
            }
        }

        // A day transition marks the *previous* reading as the boundary.
        if previous_day.as_deref() != Some(day.as_str()) {
            if let Some(last) = readings.last_mut() {
                last.day_boundary = true;
            }
        }

        readings.push(Reading {
            timestamp,
            glucose,
            day: day.clone(),
            day_boundary: false,
        });
        previous_day = Some(day);
    }

    let daily = accums
        .into_iter()
        .map(|accum| DailyStats {
            day: accum.day,
            peak: accum.peak,
            low: accum.low,
            average: accum.sum / f64::from(accum.count),
        })
        .collect();

    GlucoseSeries { readings, daily }
}

/// Validate one raw row, yielding `(timestamp, glucose, day_key)`.
fn parse_row(row: &RawRow) -> Option<(String, f64, String)> {
    if row.len() < 2 {
        return None;
    }

    let timestamp = row[0].trim();
    let day = parse_timestamp(timestamp)?;
    let glucose: f64 = row[1].trim().parse().ok()?;
    if !glucose.is_finite() {
        return None;
    }

    Some((timestamp.to_string(), glucose, day))
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp (seconds tolerated) into its day key.
fn parse_timestamp(raw: &str) -> Option<String> {
    let parsed = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw,
            &format_description!("[year]-[month]-[day] [hour]:[minute]"),
        )
    })
    .ok()?;

    parsed
        .date()
        .format(&format_description!("[year]-[month]-[day]"))
        .ok()
}
