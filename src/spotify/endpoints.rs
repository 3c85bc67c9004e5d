//! Endpoint table for the Web API.
//!
//! Every resource operation is a verb plus a path template whose `{name}`
//! segments are filled from the operation's required arguments. Building
//! the URL validates those arguments, so endpoint methods do not repeat the
//! checks.

use reqwest::{Method, Url};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    const fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
        }
    }

    const fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
        }
    }

    /// Names of the `{placeholder}` segments, in path order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// Resolves the template against `base` (scheme and host, optionally a
    /// path prefix). Substituted values are percent-encoded as single path
    /// segments. A missing or empty value fails with
    /// [`Error::MissingParameter`].
    pub fn url(&self, base: &str, params: &[(&'static str, &str)]) -> Result<String> {
        let mut segments: Vec<&str> = Vec::new();
        let path: &'static str = self.path;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match placeholder(segment) {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| value.trim())
                        .filter(|value| !value.is_empty())
                        .ok_or(Error::MissingParameter { name })?;
                    segments.push(value);
                }
                None => segments.push(segment),
            }
        }

        let invalid = |reason: String| Error::InvalidUrl {
            url: base.to_string(),
            reason,
        };
        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base url".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

pub static GET_ALBUM: Endpoint = Endpoint::get("/v1/albums/{id}");
pub static GET_SEVERAL_ALBUMS: Endpoint = Endpoint::get("/v1/albums");
pub static GET_ALBUM_TRACKS: Endpoint = Endpoint::get("/v1/albums/{id}/tracks");
pub static GET_ARTIST: Endpoint = Endpoint::get("/v1/artists/{id}");
pub static GET_ARTIST_ALBUMS: Endpoint = Endpoint::get("/v1/artists/{id}/albums");
pub static GET_ARTIST_TOP_TRACKS: Endpoint = Endpoint::get("/v1/artists/{id}/top-tracks");
pub static GET_USER_PLAYLISTS: Endpoint = Endpoint::get("/v1/users/{user}/playlists");
pub static CREATE_PLAYLIST: Endpoint = Endpoint::post("/v1/users/{user}/playlists");
pub static ADD_TRACKS_TO_PLAYLIST: Endpoint =
    Endpoint::post("/v1/users/{user}/playlists/{playlist}/tracks");
pub static GET_CURRENT_USER: Endpoint = Endpoint::get("/v1/me");
pub static GET_USER_PROFILE: Endpoint = Endpoint::get("/v1/users/{user}");
pub static SEARCH: Endpoint = Endpoint::get("/v1/search");

pub static ALL: &[&Endpoint] = &[
    &GET_ALBUM,
    &GET_SEVERAL_ALBUMS,
    &GET_ALBUM_TRACKS,
    &GET_ARTIST,
    &GET_ARTIST_ALBUMS,
    &GET_ARTIST_TOP_TRACKS,
    &GET_USER_PLAYLISTS,
    &CREATE_PLAYLIST,
    &ADD_TRACKS_TO_PLAYLIST,
    &GET_CURRENT_USER,
    &GET_USER_PROFILE,
    &SEARCH,
];

/// Query string under construction. Absent optional values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

/// Fails with [`Error::MissingParameter`] when `value` is blank.
pub fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingParameter { name });
    }
    Ok(value)
}
