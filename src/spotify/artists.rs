use serde_json::Value;

use crate::{
    error::Result,
    spotify::{
        SpotifyClient,
        endpoints::{self, GET_ARTIST, GET_ARTIST_ALBUMS, GET_ARTIST_TOP_TRACKS, Params},
    },
    transport::Transport,
};

impl<T: Transport> SpotifyClient<T> {
    pub async fn get_artist(&mut self, id: &str) -> Result<Value> {
        self.dispatch(&GET_ARTIST, &[("id", id)], Params::new(), None)
            .await
    }

    /// Retrieves an artist's discography.
    ///
    /// `include_groups` filters by release type and is passed through as
    /// given, e.g. `"album,single"`.
    pub async fn get_artist_albums(
        &mut self,
        id: &str,
        include_groups: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let query = Params::new()
            .push_opt("include_groups", include_groups)
            .push_opt("limit", limit)
            .push_opt("offset", offset);
        self.dispatch(&GET_ARTIST_ALBUMS, &[("id", id)], query, None)
            .await
    }

    /// Retrieves an artist's top tracks in `country` (ISO 3166-1 alpha-2).
    pub async fn artist_top_tracks(&mut self, id: &str, country: &str) -> Result<Value> {
        let country = endpoints::require("country", country)?;
        let query = Params::new().push("country", country);
        self.dispatch(&GET_ARTIST_TOP_TRACKS, &[("id", id)], query, None)
            .await
    }
}
