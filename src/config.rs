//! Configuration management for the command-line client.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The library itself reads no configuration; everything here feeds a
//! [`ClientBuilder`](crate::ClientBuilder).

use std::{env, path::PathBuf, time::Duration};

use crate::{
    Res,
    spotify::{DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_TIMEOUT},
    types::Credentials,
};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Path of the `.env` file:
/// - Linux: `~/.local/share/spotwrap/.env`
/// - macOS: `~/Library/Application Support/spotwrap/.env`
/// - Windows: `%LOCALAPPDATA%/spotwrap/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotwrap/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data
/// directory, creating the directory on first use.
///
/// A missing file is not an error; variables may come from the process
/// environment alone. Variables already set in the environment win over the
/// file.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

fn required(key: &str) -> Res<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{key} must be set").into()),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// The client secret should never be exposed in logs or version control.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Must match a redirect URI registered in the Spotify application
/// settings, e.g. `http://127.0.0.1:8888/callback`.
pub fn spotify_redirect_uri() -> Res<String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Space separated scopes, e.g. `user-read-private playlist-modify-public`.
pub fn spotify_scope() -> Res<String> {
    required("SPOTIFY_API_AUTH_SCOPE")
}

pub fn spotify_auth_url() -> String {
    optional("SPOTIFY_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_api_url() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Per-request timeout of the HTTP transport.
pub fn http_timeout() -> Res<Duration> {
    match env::var("SPOTIFY_HTTP_TIMEOUT_SECS") {
        Ok(value) if !value.trim().is_empty() => {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|e| format!("SPOTIFY_HTTP_TIMEOUT_SECS is not a number: {e}"))?;
            Ok(Duration::from_secs(secs))
        }
        _ => Ok(DEFAULT_TIMEOUT),
    }
}

pub fn credentials() -> Res<Credentials> {
    Ok(Credentials::new(
        spotify_client_id()?,
        spotify_client_secret()?,
        spotify_redirect_uri()?,
        spotify_scope()?,
    ))
}
