//! Typed wrappers for the `/metrics` endpoints.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiResult;
use super::transport::Transport;
use super::types::{CurrentSummary, EntryList, MonthlyBucket, MonthsSummary, NewTrainingEntry, TrainingEntry};

/// Throwaway origin used only to borrow `url`'s path-segment encoding.
const SEGMENT_BASE: &str = "http://localhost/metrics";

/// `/metrics/<id>` with `id` percent-encoded as one path segment.
fn entry_path(id: &str) -> String {
    let Ok(mut url) = url::Url::parse(SEGMENT_BASE) else {
        return format!("/metrics/{id}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    url.path().to_owned()
}

fn summary_by_month_path(limit: u32) -> String {
    format!("/metrics/summary-by-month?limit={limit}")
}

impl<T: Transport> ApiClient<T> {
    /// Totals for the current month and week.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn summary_current_month(&self) -> ApiResult<CurrentSummary> {
        self.get("/metrics/summary-current-month").await
    }

    /// The last `limit` months, newest first as the server sends them.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn summary_by_month(&self, limit: u32) -> ApiResult<Vec<MonthlyBucket>> {
        let summary: MonthsSummary = self.get(&summary_by_month_path(limit)).await?;
        Ok(summary.months)
    }

    /// Every training entry of the signed-in user.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn list_entries(&self) -> ApiResult<Vec<TrainingEntry>> {
        let list: EntryList = self.get("/metrics").await?;
        Ok(list.items)
    }

    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn create_entry(&self, entry: &NewTrainingEntry) -> ApiResult<Value> {
        self.post("/metrics", entry.to_json()).await
    }

    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn update_entry(&self, id: &str, entry: &NewTrainingEntry) -> ApiResult<Value> {
        self.put(&entry_path(id), entry.to_json()).await
    }

    /// # Errors
    ///
    /// Any [`ApiError`](super::error::ApiError) from the authenticated client.
    pub async fn delete_entry(&self, id: &str) -> ApiResult<Value> {
        self.delete(&entry_path(id)).await
    }
}
