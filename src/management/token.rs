use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
struct BearerToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// OAuth token state owned by a single client.
///
/// The access token and its expiry are stored together, so one is never
/// present without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenState {
    bearer: Option<BearerToken>,
    refresh_token: Option<String>,
}

impl TokenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.bearer.as_ref().map(|b| b.access_token.as_str())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.bearer.as_ref().map(|b| b.expires_at)
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    /// True iff there is no access token or `now` has reached its expiry.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match &self.bearer {
            Some(bearer) => now >= bearer.expires_at,
            None => true,
        }
    }

    /// Stores a freshly issued access token expiring `ttl_seconds` after
    /// `issued_at`. The refresh token is replaced only when one is given.
    ///
    /// A TTL too large to represent saturates to the latest representable
    /// instant.
    pub fn set(
        &mut self,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        ttl_seconds: u64,
        issued_at: DateTime<Utc>,
    ) {
        let expires_at = i64::try_from(ttl_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.bearer = Some(BearerToken {
            access_token: access_token.into(),
            expires_at,
        });
        if let Some(refresh_token) = refresh_token {
            self.refresh_token = Some(refresh_token);
        }
    }

    /// Seconds until expiry, negative once expired.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at().map(|at| (at - now).num_seconds())
    }
}
