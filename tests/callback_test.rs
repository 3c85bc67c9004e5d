use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::extract::{Extension, Query};
use spotwrap::{
    api::{CallbackOutcome, SharedCallback, callback, health},
    cli::auth::wait_for_callback,
};
use tokio::sync::Mutex;

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_callback_stores_code() {
    let state: SharedCallback = Arc::new(Mutex::new(None));

    let page = callback(params(&[("code", "AQB123")]), Extension(state.clone())).await;

    assert!(page.0.contains("Authorization received"));
    assert_eq!(
        *state.lock().await,
        Some(CallbackOutcome::Code("AQB123".to_string()))
    );
}

#[tokio::test]
async fn test_callback_records_denial() {
    let state: SharedCallback = Arc::new(Mutex::new(None));

    let page = callback(params(&[("error", "access_denied")]), Extension(state.clone())).await;

    assert!(page.0.contains("Authorization denied"));

    assert_eq!(
        *state.lock().await,
        Some(CallbackOutcome::Denied("access_denied".to_string()))
    );
}

#[tokio::test]
async fn test_callback_without_code_changes_nothing() {
    let state: SharedCallback = Arc::new(Mutex::new(None));

    let page = callback(params(&[]), Extension(state.clone())).await;

    assert!(page.0.contains("Missing authorization code"));
    assert!(state.lock().await.is_none());
}

#[tokio::test]
async fn test_callback_keeps_first_code() {
    let state: SharedCallback = Arc::new(Mutex::new(None));

    let _page = callback(params(&[("code", "first")]), Extension(state.clone())).await;
    let page = callback(params(&[("code", "second")]), Extension(state.clone())).await;

    assert!(page.0.contains("already received"));
    assert_eq!(
        *state.lock().await,
        Some(CallbackOutcome::Code("first".to_string()))
    );
}

#[tokio::test]
async fn test_wait_for_callback_returns_stored_outcome() {
    let state: SharedCallback = Arc::new(Mutex::new(Some(CallbackOutcome::Code(
        "AQB123".to_string(),
    ))));

    let outcome = wait_for_callback(state, Duration::from_secs(5)).await;

    assert_eq!(outcome, Some(CallbackOutcome::Code("AQB123".to_string())));
}

#[tokio::test]
async fn test_wait_for_callback_times_out() {
    let state: SharedCallback = Arc::new(Mutex::new(None));

    let outcome = wait_for_callback(state, Duration::from_millis(300)).await;

    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_health_reports_version() {
    let body = health().await.0;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
