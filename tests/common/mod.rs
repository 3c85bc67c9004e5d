#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use spotwrap::{
    ClientBuilder, Clock, Credentials, HttpRequest, HttpResponse, SpotifyClient, Transport,
    transport::TransportError,
};

pub const AUTH_URL: &str = "http://auth.test";
pub const API_URL: &str = "http://api.test";
pub const TOKEN_URL: &str = "http://auth.test/api/token";

pub fn credentials() -> Credentials {
    Credentials::new(
        "id",
        "secret",
        "http://127.0.0.1:8888/callback",
        "user-read-private playlist-modify-public",
    )
}

/// T in the scenarios: 2024-01-01T12:00:00Z.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    t0() + TimeDelta::seconds(seconds)
}

/// Clock whose time the test moves by hand.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

enum Reply {
    Response(u16, Vec<u8>),
    Failure(String),
}

/// Transport that records every request and answers from a queue.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(status, body.as_bytes().to_vec()));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(status, body)) => Ok(HttpResponse { status, url, body }),
            Some(Reply::Failure(message)) => Err(message.into()),
            None => panic!("unexpected request to {url}"),
        }
    }
}

pub fn client(transport: &StubTransport, clock: &ManualClock) -> SpotifyClient<StubTransport> {
    ClientBuilder::new(credentials())
        .auth_url(AUTH_URL)
        .api_url(API_URL)
        .clock(clock.clone())
        .build_with(transport.clone())
}

pub const TOKEN_BODY: &str = r#"{"access_token":"A","token_type":"Bearer","scope":"user-read-private","expires_in":3600,"refresh_token":"R"}"#;
pub const REFRESH_BODY: &str =
    r#"{"access_token":"B","token_type":"Bearer","scope":"user-read-private","expires_in":3600}"#;

/// Client authorized at T with access token "A" and refresh token "R".
pub async fn authorized_client(
    transport: &StubTransport,
    clock: &ManualClock,
) -> SpotifyClient<StubTransport> {
    clock.set(t0());
    transport.reply(200, TOKEN_BODY);
    let mut client = client(transport, clock);
    client.authorize("validcode").await.unwrap();
    client
}

pub fn header(request: &HttpRequest, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
