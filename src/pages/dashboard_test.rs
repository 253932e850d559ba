use super::*;

#[test]
fn iso_date_zero_pads_month_and_day() {
    assert_eq!(iso_date(2025, 3, 4), "2025-03-04");
    assert_eq!(iso_date(2024, 12, 31), "2024-12-31");
}

#[test]
fn iso_date_output_passes_entry_validation() {
    let entry = validate_entry("Cardio", "1", &iso_date(2025, 1, 9)).expect("valid entry");
    assert_eq!(entry.date, "2025-01-09");
}

#[test]
fn tab_class_marks_only_the_active_tab() {
    assert_eq!(tab_class(true), "dashboard-tab dashboard-tab--active");
    assert_eq!(tab_class(false), "dashboard-tab");
}
