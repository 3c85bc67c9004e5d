use serde_json::Value;

use crate::{
    error::{Error, Result},
    spotify::{
        SpotifyClient,
        endpoints::{self, Params, SEARCH},
    },
    transport::Transport,
    types::SearchType,
    utils,
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

impl<T: Transport> SpotifyClient<T> {
    /// Searches the catalog for albums, artists, playlists or tracks matching
    /// `q`.
    ///
    /// `limit` and `offset` default to 20 and 0 and are always sent. The
    /// response holds one result page per requested type, keyed by its
    /// plural (`"albums"`, `"tracks"`, ...).
    pub async fn search(
        &mut self,
        q: &str,
        types: &[SearchType],
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let q = endpoints::require("q", q)?;
        if types.is_empty() {
            return Err(Error::MissingParameter { name: "type" });
        }

        let query = Params::new()
            .push("q", q)
            .push("type", utils::join_search_types(types))
            .push_opt("market", market)
            .push("limit", limit.unwrap_or(DEFAULT_LIMIT))
            .push("offset", offset.unwrap_or(DEFAULT_OFFSET));
        self.dispatch(&SEARCH, &[], query, None).await
    }
}
