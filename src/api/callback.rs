use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::warning;

/// Outcome of the authorization redirect, filled in by [`callback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Code(String),
    Denied(String),
}

pub type SharedCallback = Arc<Mutex<Option<CallbackOutcome>>>;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<SharedCallback>,
) -> Html<&'static str> {
    let outcome = match (params.get("code"), params.get("error")) {
        (Some(code), _) if !code.is_empty() => CallbackOutcome::Code(code.clone()),
        (_, Some(reason)) => {
            warning!("Authorization was denied: {}", reason);
            CallbackOutcome::Denied(reason.clone())
        }
        _ => return Html("<h4>Missing authorization code.</h4>"),
    };

    let mut state = shared_state.lock().await;
    if state.is_some() {
        return Html("<h4>Authorization already received.</h4>");
    }

    let page = match outcome {
        CallbackOutcome::Code(_) => {
            "<h2>Authorization received.</h2><p>You can close this browser window.</p>"
        }
        CallbackOutcome::Denied(_) => "<h4>Authorization denied.</h4>",
    };
    *state = Some(outcome);
    Html(page)
}
