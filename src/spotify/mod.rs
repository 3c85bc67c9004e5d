//! # Spotify Web API client
//!
//! [`SpotifyClient`] is the authenticated request pipeline. It owns the
//! [`TokenState`] of one user session and guarantees that every resource
//! call leaves with a valid bearer token:
//!
//! ```text
//! endpoint method (albums, artists, playlists, profile, search)
//!          ↓
//! SpotifyClient::dispatch
//!     ├── no token          → AuthError "not authenticated", nothing sent
//!     ├── token expired     → Authenticator::refresh, once, then continue
//!     └── token valid       → Authorization: Bearer <token>
//!          ↓
//! Transport (reqwest)
//!          ↓
//! classify: 2xx → JSON, 403 → PermissionError, other → ApiError
//! ```
//!
//! A failed refresh is returned to the caller and the resource call is
//! never sent. Nothing is retried. Calls take `&mut self`, so a client
//! cannot be driven from two tasks at once without the caller adding its
//! own synchronization.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut client = SpotifyClient::new(credentials)?;
//! println!("visit {}", client.authorize_url()?);
//! client.authorize(&code).await?;
//! let album = client.get_album("0sNOF9WDwhWunNAHPD3Baj", None).await?;
//! ```

pub mod albums;
pub mod artists;
pub mod auth;
pub mod endpoints;
pub mod playlists;
pub mod profile;
pub mod search;

use std::time::Duration;

use reqwest::{Url, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    error::{ApiError, AuthError, Error, PermissionError, Result},
    management::{Clock, SystemClock, TokenState},
    transport::{Body, HttpRequest, HttpResponse, ReqwestTransport, Transport},
    types::{Credentials, ErrorResponse},
    utils,
};

pub use auth::{Authenticator, DEFAULT_AUTH_URL};
pub use endpoints::{Endpoint, Params};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SpotifyClient<T = ReqwestTransport> {
    transport: T,
    authenticator: Authenticator,
    token: TokenState,
    clock: Box<dyn Clock>,
    api_url: String,
}

impl SpotifyClient<ReqwestTransport> {
    /// Client against the public Spotify endpoints with default timeouts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }
}

impl<T: Transport> SpotifyClient<T> {
    pub fn token(&self) -> &TokenState {
        &self.token
    }

    pub fn credentials(&self) -> &Credentials {
        self.authenticator.credentials()
    }

    pub fn authorize_url(&self) -> Result<Url> {
        self.authenticator.authorize_url()
    }

    /// Consumes a one-time authorization grant and replaces the session's
    /// token state with the issued token pair.
    pub async fn authorize(&mut self, code: &str) -> Result<()> {
        let code = endpoints::require("code", code)?;
        let issued_at = self.clock.now();
        let token = self
            .authenticator
            .exchange_code(&self.transport, code, issued_at)
            .await?;
        info!(expires_at = ?token.expires_at(), "authorization code exchanged");
        self.token = token;
        Ok(())
    }

    /// Sends one resource call through the pipeline and returns the decoded
    /// JSON body.
    pub async fn dispatch(
        &mut self,
        endpoint: &Endpoint,
        path_params: &[(&'static str, &str)],
        query: Params,
        body: Option<Body>,
    ) -> Result<Value> {
        let url = endpoint.url(&self.api_url, path_params)?;
        let access_token = self.valid_access_token(&url).await?;
        let bearer = utils::bearer_auth_value(&access_token).map_err(|_| AuthError {
            status: None,
            url: url.clone(),
            message: "access token is not a valid header value".to_string(),
        })?;

        let mut request = HttpRequest::new(endpoint.method.clone(), url);
        request.headers.insert(AUTHORIZATION, bearer);
        request.query = query.into_inner();
        request.body = body;

        debug!(method = %request.method, url = %request.url, "dispatching request");
        let response = self
            .transport
            .send(request)
            .await
            .map_err(Error::Transport)?;
        debug!(status = response.status, url = %response.url, "response received");

        classify(response)
    }

    /// Refreshes a stale token before handing out the access token. Without
    /// any token the call fails immediately; there is no refresh token to
    /// use yet.
    async fn valid_access_token(&mut self, url: &str) -> Result<String> {
        if !self.token.is_authenticated() {
            return Err(AuthError::not_authenticated(url).into());
        }

        let now = self.clock.now();
        if self.token.is_stale(now) {
            info!("access token expired, refreshing");
            let refreshed = self
                .authenticator
                .refresh(&self.transport, &self.token, now)
                .await;
            match refreshed {
                Ok(token) => self.token = token,
                Err(e) => {
                    warn!(error = %e, "token refresh failed");
                    return Err(e);
                }
            }
        }

        self.token
            .access_token()
            .map(str::to_string)
            .ok_or_else(|| AuthError::not_authenticated(url).into())
    }
}

/// Maps a resource server response onto the error taxonomy.
fn classify(response: HttpResponse) -> Result<Value> {
    if response.is_success() {
        return serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            url: response.url,
            source,
        });
    }

    if response.status == 403 {
        return Err(PermissionError::insufficient_scope(response.status, response.url).into());
    }

    let message = serde_json::from_slice::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|body| body.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", response.status));

    Err(ApiError {
        http_status: response.status,
        request_url: response.url,
        message,
    }
    .into())
}

/// Configures base URLs, timeout, transport and clock of a
/// [`SpotifyClient`].
pub struct ClientBuilder {
    credentials: Credentials,
    auth_url: String,
    api_url: String,
    timeout: Duration,
    clock: Box<dyn Clock>,
}

impl ClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            clock: Box::new(SystemClock),
        }
    }

    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn build(self) -> Result<SpotifyClient<ReqwestTransport>> {
        let transport = ReqwestTransport::with_timeout(self.timeout).map_err(Error::Transport)?;
        Ok(self.build_with(transport))
    }

    /// Uses `transport` instead of a `reqwest` client; the timeout setting
    /// is then the transport's concern.
    pub fn build_with<T: Transport>(self, transport: T) -> SpotifyClient<T> {
        SpotifyClient {
            transport,
            authenticator: Authenticator::new(self.credentials, self.auth_url),
            token: TokenState::new(),
            clock: self.clock,
            api_url: self.api_url,
        }
    }
}
