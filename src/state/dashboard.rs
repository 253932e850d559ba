//! Dashboard data and tab state.
//!
//! DESIGN
//! ======
//! Loading is a fixed sequence of three authenticated calls (current summary,
//! entry list, monthly history). The first failure stops the sequence; there
//! are no retries, the user reloads by acting again.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::config::SERIES_MONTHS;
use crate::net::client::ApiClient;
use crate::net::error::{ApiError, ApiResult};
use crate::net::transport::Transport;
use crate::net::types::{CurrentSummary, MonthlyBucket, SummaryRow, TrainingEntry};
use crate::util::series::{self, SeriesPoint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Summary,
    AddEntry,
    Entries,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Summary, Self::AddEntry, Self::Entries];

    pub fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::AddEntry => "Add training",
            Self::Entries => "Entries",
        }
    }
}

/// Everything one dashboard load fetches.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub current: CurrentSummary,
    pub entries: Vec<TrainingEntry>,
    pub months: Vec<MonthlyBucket>,
}

/// Fetch the dashboard payload in display order.
///
/// # Errors
///
/// The first failing call's [`ApiError`].
pub async fn load_dashboard<T: Transport>(api: &ApiClient<T>) -> ApiResult<DashboardData> {
    let current = api.summary_current_month().await?;
    let entries = api.list_entries().await?;
    let months = api.summary_by_month(SERIES_MONTHS).await?;
    Ok(DashboardData { current, entries, months })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub month: Option<MonthlyBucket>,
    pub entries: Vec<TrainingEntry>,
    pub series: Vec<SeriesPoint>,
}

impl DashboardState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn apply_data(&mut self, data: DashboardData) {
        self.loading = false;
        self.error = None;
        self.month = Some(data.current.month);
        self.entries = data.entries;
        self.series = series::to_series(&data.months);
    }

    /// Record a failed call. Session-loss outcomes are not shown in-page;
    /// the shell is already sending the user to the login page.
    pub fn apply_error(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = err.user_message();
    }

    pub fn period_label(&self) -> Option<String> {
        self.month.as_ref().map(series::period_label)
    }

    pub fn month_bars(&self) -> Vec<SummaryRow> {
        self.month.as_ref().map(series::month_bars).unwrap_or_default()
    }
}
