//! Chart series built from monthly summary buckets.
//!
//! DESIGN
//! ======
//! The transform is pure and never fails: a malformed bucket degrades to zero
//! bars instead of taking the whole dashboard down. Unknown categories are
//! dropped and duplicate categories resolve to the last row seen.

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

use serde::Serialize;

use crate::net::types::{MonthlyBucket, SummaryRow, TrainingType};

/// One month in the grouped bar chart, oldest first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// `MM/YYYY`.
    pub label: String,
    #[serde(rename = "Cardio")]
    pub cardio: f64,
    #[serde(rename = "Fuerza")]
    pub fuerza: f64,
}

impl SeriesPoint {
    fn zeroed(label: String) -> Self {
        Self { label, cardio: 0.0, fuerza: 0.0 }
    }

    pub fn hours(&self, kind: TrainingType) -> f64 {
        match kind {
            TrainingType::Cardio => self.cardio,
            TrainingType::Fuerza => self.fuerza,
        }
    }

    fn set(&mut self, kind: TrainingType, hours: f64) {
        match kind {
            TrainingType::Cardio => self.cardio = hours,
            TrainingType::Fuerza => self.fuerza = hours,
        }
    }
}

/// `03/2025`: two-digit month over four-digit year.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{month:02}/{year:04}")
}

/// `3/2025`: the period caption shown above the current-month chart.
pub fn period_label(bucket: &MonthlyBucket) -> String {
    format!("{}/{}", bucket.month, bucket.year)
}

/// Reshape newest-first buckets into an oldest-first series.
pub fn to_series(buckets: &[MonthlyBucket]) -> Vec<SeriesPoint> {
    buckets.iter().rev().map(series_point).collect()
}

fn series_point(bucket: &MonthlyBucket) -> SeriesPoint {
    let mut point = SeriesPoint::zeroed(month_label(bucket.year, bucket.month));
    for row in &bucket.rows {
        if let Some(kind) = TrainingType::from_name(&row.category) {
            point.set(kind, row.hours);
        }
    }
    point
}

/// Rows for the current-month chart, in server order.
///
/// Unlike [`to_series`] this keeps every category the server reported; rows
/// with non-finite hours are skipped.
pub fn month_bars(bucket: &MonthlyBucket) -> Vec<SummaryRow> {
    bucket.rows.iter().filter(|row| row.hours.is_finite()).cloned().collect()
}

/// Largest bar value across the series, used to scale the chart.
pub fn max_hours(series: &[SeriesPoint]) -> f64 {
    series
        .iter()
        .flat_map(|p| TrainingType::ALL.map(|kind| p.hours(kind)))
        .filter(|h| h.is_finite())
        .fold(0.0, f64::max)
}
