use super::*;
use crate::net::fake_transport::FakeTransport;
use crate::session::{MemoryStore, Session};

const CURRENT: &str = r#"{"month":{"year":2025,"month":4,"summary":[{"type":"Cardio","hours":3}]},"week":{"year":2025,"week":15,"summary":[]}}"#;
const ITEMS: &str = r#"{"items":[{"_id":"1","type":"Cardio","hours":3,"date":"2025-04-02"}]}"#;
const MONTHS: &str = r#"{"months":[{"year":2025,"month":4,"summary":[{"type":"Cardio","hours":3}]},{"year":2025,"month":3,"summary":[{"type":"Fuerza","hours":1}]}]}"#;

fn signed_in(transport: &FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport.clone(), Session::new(MemoryStore::with_token("tok")))
}

#[test]
fn default_tab_is_summary() {
    assert_eq!(DashboardState::default().tab, DashboardTab::Summary);
    assert_eq!(DashboardTab::ALL.len(), 3);
}

#[tokio::test]
async fn load_dashboard_fetches_in_order_and_builds_series() {
    let transport = FakeTransport::new().reply(200, CURRENT).reply(200, ITEMS).reply(200, MONTHS);
    let client = signed_in(&transport);

    let data = load_dashboard(&client).await.expect("data");
    let mut state = DashboardState::loading();
    state.apply_data(data);

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "/api/metrics/summary-current-month".to_owned(),
            "/api/metrics".to_owned(),
            "/api/metrics/summary-by-month?limit=6".to_owned(),
        ]
    );
    assert!(!state.loading);
    assert_eq!(state.period_label().as_deref(), Some("4/2025"));
    assert_eq!(state.entries.len(), 1);
    let labels: Vec<&str> = state.series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["03/2025", "04/2025"]);
    assert_eq!(state.month_bars().len(), 1);
}

#[tokio::test]
async fn load_dashboard_stops_at_first_failure() {
    let transport = FakeTransport::new().reply(200, CURRENT).reply(500, "boom").reply(200, MONTHS);
    let client = signed_in(&transport);

    let result = load_dashboard(&client).await;

    assert_eq!(result, Err(ApiError::Http { status: 500, message: "boom".to_owned() }));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn apply_error_shows_recoverable_errors_only() {
    let mut state = DashboardState::loading();
    state.apply_error(&ApiError::Network("offline".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("network error: offline"));

    let mut state = DashboardState::loading();
    state.apply_error(&ApiError::SessionExpired);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn empty_state_has_no_period_or_bars() {
    let state = DashboardState::default();
    assert_eq!(state.period_label(), None);
    assert!(state.month_bars().is_empty());
}
