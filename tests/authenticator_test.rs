mod common;

use common::*;
use reqwest::Method;
use spotwrap::{Authenticator, Body, Error, TokenState, error::AuthError};

fn authenticator() -> Authenticator {
    Authenticator::new(credentials(), AUTH_URL)
}

#[tokio::test]
async fn test_exchange_code_populates_token_state() {
    let transport = StubTransport::new();
    transport.reply(200, TOKEN_BODY);

    let state = authenticator()
        .exchange_code(&transport, "validcode", t0())
        .await
        .unwrap();

    assert_eq!(state.access_token(), Some("A"));
    assert_eq!(state.refresh_token(), Some("R"));
    assert_eq!(state.expires_at(), Some(at(3600)));
}

#[tokio::test]
async fn test_exchange_code_posts_form_without_basic_auth() {
    let transport = StubTransport::new();
    transport.reply(200, TOKEN_BODY);

    authenticator()
        .exchange_code(&transport, "validcode", t0())
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, TOKEN_URL);
    assert!(request.headers.get("authorization").is_none());
    assert!(matches!(request.body, Some(Body::Form(_))));
    assert_eq!(request.form_value("grant_type"), Some("authorization_code"));
    assert_eq!(request.form_value("code"), Some("validcode"));
    assert_eq!(
        request.form_value("redirect_uri"),
        Some("http://127.0.0.1:8888/callback")
    );
    assert_eq!(request.form_value("client_id"), Some("id"));
    assert_eq!(request.form_value("client_secret"), Some("secret"));
}

#[tokio::test]
async fn test_exchange_code_non_200_is_auth_error() {
    for status in [400, 401, 500, 201] {
        let transport = StubTransport::new();
        transport.reply(status, r#"{"error":"invalid_grant"}"#);

        let err = authenticator()
            .exchange_code(&transport, "usedcode", t0())
            .await
            .unwrap_err();

        match err {
            Error::Auth(AuthError {
                status: s,
                url,
                message,
            }) => {
                assert_eq!(s, Some(status));
                assert_eq!(url, TOKEN_URL);
                assert_eq!(message, "authorization failed");
            }
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_exchange_code_malformed_success_body_is_decode_error() {
    let transport = StubTransport::new();
    transport.reply(200, r#"{"access_token":"A"}"#);

    let err = authenticator()
        .exchange_code(&transport, "validcode", t0())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn test_exchange_code_transport_failure_passes_through() {
    let transport = StubTransport::new();
    transport.fail("connection refused");

    let err = authenticator()
        .exchange_code(&transport, "validcode", t0())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_refresh_sends_basic_auth_and_refresh_grant() {
    let transport = StubTransport::new();
    transport.reply(200, REFRESH_BODY);
    let mut current = TokenState::new();
    current.set("A", Some("R".to_string()), 3600, t0());

    authenticator()
        .refresh(&transport, &current, at(3601))
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, TOKEN_URL);
    assert_eq!(
        header(&request, "authorization").as_deref(),
        Some("Basic aWQ6c2VjcmV0")
    );
    assert_eq!(request.form_value("grant_type"), Some("refresh_token"));
    assert_eq!(request.form_value("refresh_token"), Some("R"));
    assert_eq!(request.form_value("client_secret"), None);
}

#[tokio::test]
async fn test_refresh_preserves_refresh_token_when_omitted() {
    let transport = StubTransport::new();
    transport.reply(200, REFRESH_BODY);
    let mut current = TokenState::new();
    current.set("A", Some("R".to_string()), 3600, t0());

    let refreshed = authenticator()
        .refresh(&transport, &current, at(3601))
        .await
        .unwrap();

    assert_eq!(refreshed.access_token(), Some("B"));
    assert_eq!(refreshed.refresh_token(), Some("R"));
    assert_eq!(refreshed.expires_at(), Some(at(3601 + 3600)));
    // the input is left untouched
    assert_eq!(current.access_token(), Some("A"));
}

#[tokio::test]
async fn test_refresh_adopts_rotated_refresh_token() {
    let transport = StubTransport::new();
    transport.reply(
        200,
        r#"{"access_token":"B","refresh_token":"R2","expires_in":60}"#,
    );
    let mut current = TokenState::new();
    current.set("A", Some("R".to_string()), 3600, t0());

    let refreshed = authenticator()
        .refresh(&transport, &current, at(3601))
        .await
        .unwrap();

    assert_eq!(refreshed.refresh_token(), Some("R2"));
    assert_eq!(refreshed.expires_at(), Some(at(3661)));
}

#[tokio::test]
async fn test_refresh_failure_is_auth_error() {
    let transport = StubTransport::new();
    transport.reply(400, r#"{"error":"invalid_grant","error_description":"Refresh token revoked"}"#);
    let mut current = TokenState::new();
    current.set("A", Some("R".to_string()), 3600, t0());

    let err = authenticator()
        .refresh(&transport, &current, at(3601))
        .await
        .unwrap_err();

    match err {
        Error::Auth(e) => {
            assert_eq!(e.status, Some(400));
            assert_eq!(e.url, TOKEN_URL);
            assert_eq!(e.message, "authorization failed when refreshing token");
        }
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_without_refresh_token_sends_nothing() {
    let transport = StubTransport::new();

    let err = authenticator()
        .refresh(&transport, &TokenState::new(), t0())
        .await
        .unwrap_err();

    match err {
        Error::Auth(e) => {
            assert_eq!(e.status, None);
            assert_eq!(e.message, AuthError::NOT_AUTHENTICATED);
        }
        other => panic!("expected auth error, got {other:?}"),
    }
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_authorize_url_encodes_parameters() {
    let url = authenticator().authorize_url().unwrap();

    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("auth.test"));
    assert_eq!(url.path(), "/authorize");

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("client_id".to_string(), "id".to_string()),
            ("response_type".to_string(), "code".to_string()),
            (
                "redirect_uri".to_string(),
                "http://127.0.0.1:8888/callback".to_string()
            ),
            (
                "scope".to_string(),
                "user-read-private playlist-modify-public".to_string()
            ),
        ]
    );
    assert!(!url.as_str().contains(' '));
}

#[test]
fn test_token_url_ignores_trailing_slash() {
    let auth = Authenticator::new(credentials(), "http://auth.test/");
    assert_eq!(auth.token_url(), TOKEN_URL);
}

#[test]
fn test_credentials_debug_hides_secret() {
    let rendered = format!("{:?}", credentials());
    assert!(rendered.contains("id"));
    assert!(!rendered.contains("secret\""));
    assert!(rendered.contains("<redacted>"));
}
