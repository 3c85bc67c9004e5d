use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    SpotifyClient,
    api::{CallbackOutcome, SharedCallback},
    config, error, info,
    server::start_api_server,
    success, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a client from the environment, exiting on missing configuration.
pub fn build_client() -> SpotifyClient {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    let timeout = match config::http_timeout() {
        Ok(t) => t,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match SpotifyClient::builder(credentials)
        .auth_url(config::spotify_auth_url())
        .api_url(config::spotify_api_url())
        .timeout(timeout)
        .build()
    {
        Ok(client) => client,
        Err(e) => error!("Failed to create HTTP client: {}", e),
    }
}

/// Prints the consent URL without starting the callback server.
pub fn auth_url() {
    let client = build_client();
    match client.authorize_url() {
        Ok(url) => println!("{}", url),
        Err(e) => error!("Failed to build authorization URL: {}", e),
    }
}

/// Returns a client holding a fresh token.
///
/// Tokens are not persisted, so every command authorizes anew: with `code`
/// the given grant is exchanged directly, otherwise the browser flow runs
/// against the local callback server.
pub async fn authenticated_client(code: Option<String>) -> SpotifyClient {
    let mut client = build_client();

    let code = match code {
        Some(code) => code,
        None => interactive_code(&client).await,
    };

    if let Err(e) = client.authorize(&code).await {
        error!("Authorization failed: {}", e);
    }
    success!("Authorization successful!");
    client
}

async fn interactive_code(client: &SpotifyClient) -> String {
    let auth_url = match client.authorize_url() {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    let shared_state: SharedCallback = Arc::new(Mutex::new(None));
    let server_state = Arc::clone(&shared_state);
    let addr = config::server_addr();
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(&addr, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    } else {
        info!("Waiting for authorization in the browser...");
    }

    let outcome = wait_for_callback(shared_state, CALLBACK_TIMEOUT).await;
    server.abort();

    match outcome {
        Some(CallbackOutcome::Code(code)) => code,
        Some(CallbackOutcome::Denied(reason)) => error!("Authorization denied: {}", reason),
        None => error!("Authorization timed out."),
    }
}

/// Polls the shared state once per second until the callback handler has
/// stored an outcome or `max_wait` elapses.
pub async fn wait_for_callback(
    shared_state: SharedCallback,
    max_wait: Duration,
) -> Option<CallbackOutcome> {
    let start = tokio::time::Instant::now();

    loop {
        if let Some(outcome) = shared_state.lock().await.clone() {
            return Some(outcome);
        }
        if start.elapsed() >= max_wait {
            return None;
        }
        tokio::time::sleep(Duration::from_secs(1).min(max_wait)).await;
    }
}
