use serde_json::Value;

use crate::{
    error::{Error, Result},
    spotify::{
        SpotifyClient,
        endpoints::{ADD_TRACKS_TO_PLAYLIST, CREATE_PLAYLIST, GET_USER_PLAYLISTS, Params, require},
    },
    transport::{Body, Transport},
    types::{AddTracksToPlaylistRequest, CreatePlaylistRequest},
};

/// Maximum number of track URIs accepted per add-tracks request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

impl<T: Transport> SpotifyClient<T> {
    pub async fn get_user_playlists(
        &mut self,
        user: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let query = Params::new()
            .push_opt("limit", limit)
            .push_opt("offset", offset);
        self.dispatch(&GET_USER_PLAYLISTS, &[("user", user)], query, None)
            .await
    }

    /// Creates an empty playlist owned by `user`.
    ///
    /// Needs the `playlist-modify-public` or `playlist-modify-private`
    /// scope; without it Spotify answers 403 and the call fails with
    /// [`Error::Permission`].
    pub async fn create_playlist(&mut self, user: &str, name: &str, public: bool) -> Result<Value> {
        let name = require("name", name)?;
        let body = json_body(&CreatePlaylistRequest {
            name: name.to_string(),
            public,
        })?;
        self.dispatch(
            &CREATE_PLAYLIST,
            &[("user", user)],
            Params::new(),
            Some(body),
        )
        .await
    }

    /// Appends tracks, given as Spotify URIs, to a playlist.
    pub async fn add_tracks_to_playlist(
        &mut self,
        user: &str,
        playlist: &str,
        uris: &[String],
    ) -> Result<Value> {
        let uris: Vec<String> = uris
            .iter()
            .map(|uri| uri.trim())
            .filter(|uri| !uri.is_empty())
            .map(str::to_string)
            .collect();
        if uris.is_empty() {
            return Err(Error::MissingParameter { name: "uris" });
        }
        if uris.len() > MAX_TRACKS_PER_REQUEST {
            return Err(Error::TooManyItems {
                name: "uris",
                max: MAX_TRACKS_PER_REQUEST,
                given: uris.len(),
            });
        }

        let body = json_body(&AddTracksToPlaylistRequest { uris })?;
        self.dispatch(
            &ADD_TRACKS_TO_PLAYLIST,
            &[("user", user), ("playlist", playlist)],
            Params::new(),
            Some(body),
        )
        .await
    }
}

fn json_body<S: serde::Serialize>(value: &S) -> Result<Body> {
    serde_json::to_value(value)
        .map(Body::Json)
        .map_err(Error::Encode)
}
