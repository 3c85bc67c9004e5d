//! Error taxonomy for the Spotify client.
//!
//! Every failure of the client is surfaced exactly once as an [`Error`]
//! value. Nothing is retried. The variants carry enough context (status,
//! request URL, message) for a caller to log or display the failure.

use thiserror::Error;

use crate::transport::TransportError;

/// Failure of the authorization-code exchange, the refresh exchange, or a
/// resource call attempted before any token was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (http status: {status:?}, url: {url})")]
pub struct AuthError {
    /// HTTP status of the token endpoint, `None` when no request was made.
    pub status: Option<u16>,
    pub url: String,
    pub message: String,
}

impl AuthError {
    pub const NOT_AUTHENTICATED: &'static str = "not authenticated";

    pub fn new(status: u16, url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn not_authenticated(url: impl Into<String>) -> Self {
        Self {
            status: None,
            url: url.into(),
            message: Self::NOT_AUTHENTICATED.to_string(),
        }
    }
}

/// HTTP 403 on a resource call: the token lacks the required OAuth scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("http status: {http_status}, url: {request_url} - {message}")]
pub struct PermissionError {
    pub http_status: u16,
    pub request_url: String,
    pub message: String,
}

impl PermissionError {
    pub fn insufficient_scope(http_status: u16, request_url: impl Into<String>) -> Self {
        Self {
            http_status,
            request_url: request_url.into(),
            message: "insufficient scope".to_string(),
        }
    }
}

/// Any other non-success status on a resource call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("http status: {http_status}, url: {request_url} - {message}")]
pub struct ApiError {
    pub http_status: u16,
    pub request_url: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure below HTTP semantics, passed through from the transport.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// A nominally successful response whose body is not the expected JSON.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("missing required parameter `{name}`")]
    MissingParameter { name: &'static str },

    #[error("too many values for `{name}`: {given} given, at most {max} allowed")]
    TooManyItems {
        name: &'static str,
        max: usize,
        given: usize,
    },

    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Error {
    /// HTTP status associated with the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth(e) => e.status,
            Error::Permission(e) => Some(e.http_status),
            Error::Api(e) => Some(e.http_status),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Auth(e) => Some(&e.url),
            Error::Permission(e) => Some(&e.request_url),
            Error::Api(e) => Some(&e.request_url),
            Error::Decode { url, .. } | Error::InvalidUrl { url, .. } => Some(url),
            _ => None,
        }
    }

    /// True when the caller has to re-run the authorization step.
    pub fn requires_authorization(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
