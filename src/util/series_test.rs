use super::*;

fn bucket(year: i32, month: u32, rows: &[(&str, f64)]) -> MonthlyBucket {
    MonthlyBucket {
        year,
        month,
        rows: rows
            .iter()
            .map(|(category, hours)| SummaryRow { category: (*category).to_owned(), hours: *hours })
            .collect(),
    }
}

fn point(label: &str, cardio: f64, fuerza: f64) -> SeriesPoint {
    SeriesPoint { label: label.to_owned(), cardio, fuerza }
}

#[test]
fn empty_input_yields_empty_series() {
    assert!(to_series(&[]).is_empty());
}

#[test]
fn single_bucket_seeds_missing_categories_with_zero() {
    let series = to_series(&[bucket(2025, 3, &[("Cardio", 2.0)])]);
    assert_eq!(series, vec![point("03/2025", 2.0, 0.0)]);
}

#[test]
fn newest_first_input_becomes_oldest_first_output() {
    let input = [bucket(2025, 4, &[("Cardio", 3.0)]), bucket(2025, 3, &[("Fuerza", 1.0)])];
    assert_eq!(to_series(&input), vec![point("03/2025", 0.0, 1.0), point("04/2025", 3.0, 0.0)]);
}

#[test]
fn unknown_categories_are_dropped() {
    let series = to_series(&[bucket(2024, 11, &[("Yoga", 5.0), ("Fuerza", 2.5)])]);
    assert_eq!(series, vec![point("11/2024", 0.0, 2.5)]);
}

#[test]
fn duplicate_category_keeps_last_row() {
    let series = to_series(&[bucket(2025, 1, &[("Cardio", 1.0), ("Cardio", 4.0)])]);
    assert_eq!(series, vec![point("01/2025", 4.0, 0.0)]);
}

#[test]
fn series_is_deterministic() {
    let input = [bucket(2025, 2, &[("Cardio", 1.5), ("Fuerza", 0.5)]), bucket(2025, 1, &[])];
    assert_eq!(to_series(&input), to_series(&input));
}

#[test]
fn series_serializes_with_category_keys() {
    let json = serde_json::to_value(point("03/2025", 2.0, 0.0)).expect("json");
    assert_eq!(json, serde_json::json!({ "label": "03/2025", "Cardio": 2.0, "Fuerza": 0.0 }));
}

#[test]
fn month_label_pads_month_and_year() {
    assert_eq!(month_label(2025, 3), "03/2025");
    assert_eq!(month_label(2025, 12), "12/2025");
    assert_eq!(month_label(999, 1), "01/0999");
}

#[test]
fn period_label_is_unpadded() {
    assert_eq!(period_label(&bucket(2025, 3, &[])), "3/2025");
}

#[test]
fn month_bars_keep_unknown_categories_and_skip_nan() {
    let bars = month_bars(&bucket(2025, 3, &[("Yoga", 1.0), ("Cardio", f64::NAN), ("Fuerza", 2.0)]));
    let names: Vec<&str> = bars.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(names, vec!["Yoga", "Fuerza"]);
}

#[test]
fn max_hours_scans_every_category() {
    let series = [point("01/2025", 1.0, 7.5), point("02/2025", 3.0, 0.0)];
    assert!((max_hours(&series) - 7.5).abs() < f64::EPSILON);
    assert!(max_hours(&[]).abs() < f64::EPSILON);
}
