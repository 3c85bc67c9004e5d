use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, process::Command};

async fn token() -> Json<Value> {
    Json(json!({
        "access_token": "A",
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "R"
    }))
}

async fn me() -> Json<Value> {
    Json(json!({"id": "wizzler", "display_name": "Wizzler"}))
}

/// Serves the token endpoint and `/v1/me` on an ephemeral port.
async fn spawn_spotify() -> String {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me", get(me));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_json_output_is_not_mixed_with_status_lines() {
    let base = spawn_spotify().await;
    let data_dir = std::env::temp_dir().join("spotwrap-cli-output-test");

    let output = Command::new(env!("CARGO_BIN_EXE_spotwrap"))
        .args(["--code", "AQB123", "me"])
        .env("XDG_DATA_HOME", &data_dir)
        .env("SPOTIFY_API_AUTH_CLIENT_ID", "id")
        .env("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret")
        .env("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback")
        .env("SPOTIFY_API_AUTH_SCOPE", "user-read-private")
        .env("SPOTIFY_AUTH_URL", &base)
        .env("SPOTIFY_API_URL", &base)
        .output()
        .await
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(output.status.success(), "stderr: {stderr}");

    let profile: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profile["id"], "wizzler");
    assert!(stderr.contains("Authorization successful"));
}
