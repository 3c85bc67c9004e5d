use chrono::{DateTime, Utc};
use reqwest::{Method, Url, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{AuthError, Error, Result},
    management::TokenState,
    transport::{Body, HttpRequest, HttpResponse, Transport},
    types::{AuthorizationResponse, Credentials, RefreshResponse},
    utils,
};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com";

const AUTHORIZATION_FAILED: &str = "authorization failed";
const REFRESH_FAILED: &str = "authorization failed when refreshing token";

/// Talks to the accounts service token endpoint on behalf of a confidential
/// client.
///
/// Both exchanges post `application/x-www-form-urlencoded` bodies. Only the
/// refresh exchange authenticates the client with an HTTP Basic header; the
/// authorization-code exchange sends the client id and secret as form
/// fields.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    auth_url: String,
}

impl Authenticator {
    pub fn new(credentials: Credentials, auth_url: impl Into<String>) -> Self {
        Self {
            credentials,
            auth_url: auth_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.auth_url)
    }

    /// URL the user visits to grant consent. Spotify redirects back to
    /// `redirect_uri` with a one-time `code` query parameter.
    pub fn authorize_url(&self) -> Result<Url> {
        let base = format!("{}/authorize", self.auth_url);
        Url::parse_with_params(
            &base,
            &[
                ("client_id", self.credentials.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("scope", self.credentials.scope.as_str()),
            ],
        )
        .map_err(|e| Error::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })
    }

    /// Exchanges a one-time authorization grant for the initial token pair.
    pub async fn exchange_code<T>(
        &self,
        transport: &T,
        grant: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenState>
    where
        T: Transport + ?Sized,
    {
        let mut request = HttpRequest::new(Method::POST, self.token_url());
        request.body = Some(Body::Form(vec![
            ("grant_type".into(), "authorization_code".into()),
            ("code".into(), grant.into()),
            ("redirect_uri".into(), self.credentials.redirect_uri.clone()),
            ("client_id".into(), self.credentials.client_id.clone()),
            ("client_secret".into(), self.credentials.client_secret.clone()),
        ]));

        debug!(url = %request.url, "exchanging authorization code");
        let response = self.post(transport, request, AUTHORIZATION_FAILED).await?;
        let body: AuthorizationResponse = decode(&response)?;

        let mut state = TokenState::new();
        state.set(
            body.access_token,
            Some(body.refresh_token),
            body.expires_in,
            issued_at,
        );
        Ok(state)
    }

    /// Obtains a new access token with the refresh token held in `current`.
    ///
    /// The returned state keeps the previous refresh token unless the
    /// response carries a new one.
    pub async fn refresh<T>(
        &self,
        transport: &T,
        current: &TokenState,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenState>
    where
        T: Transport + ?Sized,
    {
        let token_url = self.token_url();
        let Some(refresh_token) = current.refresh_token() else {
            return Err(AuthError::not_authenticated(token_url).into());
        };

        let basic = utils::basic_auth_value(
            &self.credentials.client_id,
            &self.credentials.client_secret,
        )
        .map_err(|_| AuthError {
            status: None,
            url: token_url.clone(),
            message: "client credentials are not a valid header value".to_string(),
        })?;

        let mut request = HttpRequest::new(Method::POST, token_url);
        request.headers.insert(AUTHORIZATION, basic);
        request.body = Some(Body::Form(vec![
            ("grant_type".into(), "refresh_token".into()),
            ("refresh_token".into(), refresh_token.to_string()),
        ]));

        debug!(url = %request.url, "refreshing access token");
        let response = self.post(transport, request, REFRESH_FAILED).await?;
        let body: RefreshResponse = decode(&response)?;

        let mut state = current.clone();
        state.set(
            body.access_token,
            body.refresh_token,
            body.expires_in,
            issued_at,
        );
        Ok(state)
    }

    async fn post<T>(
        &self,
        transport: &T,
        request: HttpRequest,
        failure: &str,
    ) -> Result<HttpResponse>
    where
        T: Transport + ?Sized,
    {
        let response = transport.send(request).await.map_err(Error::Transport)?;
        if response.status != 200 {
            return Err(AuthError::new(response.status, response.url, failure).into());
        }
        Ok(response)
    }
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D> {
    serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
        url: response.url.clone(),
        source,
    })
}
