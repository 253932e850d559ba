//! Minimal bar charts for the dashboard summary tab.
//!
//! Bars are plain `div`s sized by percentage; styling lives in the
//! stylesheet.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::{SummaryRow, TrainingType};
use crate::util::series::{SeriesPoint, max_hours};

/// Bar length as a CSS percentage of `max`, clamped to `0..=100`.
pub(crate) fn bar_percent(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

pub(crate) fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    format!("{rounded} h")
}

fn bar_style(value: f64, max: f64) -> String {
    format!("width: {:.1}%", bar_percent(value, max))
}

/// Hours per category for the current month.
#[component]
pub fn MonthBars(#[prop(into)] rows: Signal<Vec<SummaryRow>>) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <p class="chart-empty">"No training logged this month."</p> }.into_any();
        }
        let max = rows.iter().map(|r| r.hours).fold(0.0, f64::max);
        view! {
            <ul class="bar-chart">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="bar-chart__row">
                                <span class="bar-chart__label">{row.category.clone()}</span>
                                <span class="bar-chart__bar" style=bar_style(row.hours, max)></span>
                                <span class="bar-chart__value">{format_hours(row.hours)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    }
}

/// Grouped bars per month, one bar per known training type.
#[component]
pub fn SeriesBars(#[prop(into)] series: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    move || {
        let series = series.get();
        if series.is_empty() {
            return view! { <p class="chart-empty">"No data for recent months."</p> }.into_any();
        }
        let max = max_hours(&series);
        view! {
            <ul class="series-chart">
                {series
                    .into_iter()
                    .map(|point| {
                        view! {
                            <li class="series-chart__group">
                                <span class="series-chart__label">{point.label.clone()}</span>
                                {TrainingType::ALL
                                    .into_iter()
                                    .map(|kind| {
                                        let hours = point.hours(kind);
                                        view! {
                                            <span
                                                class=format!("series-chart__bar series-chart__bar--{}", kind.as_str().to_lowercase())
                                                style=bar_style(hours, max)
                                                title=format!("{kind}: {}", format_hours(hours))
                                            ></span>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    }
}
