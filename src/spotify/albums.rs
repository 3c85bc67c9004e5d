use serde_json::Value;

use crate::{
    error::{Error, Result},
    spotify::{
        SpotifyClient,
        endpoints::{self, GET_ALBUM, GET_ALBUM_TRACKS, GET_SEVERAL_ALBUMS, Params},
    },
    transport::Transport,
};

/// Maximum number of ids accepted by `GET /v1/albums`.
pub const MAX_SEVERAL_ALBUMS: usize = 20;

impl<T: Transport> SpotifyClient<T> {
    /// Retrieves catalog information for a single album.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify ID of the album
    /// * `market` - Optional ISO 3166-1 alpha-2 country code; when given only
    ///   content playable in that market is returned
    ///
    /// # Returns
    ///
    /// The album object exactly as the Web API returned it.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameter`](crate::Error::MissingParameter) for a blank id
    /// - [`Error::Auth`](crate::Error::Auth) before authorization or when a
    ///   refresh fails
    /// - [`Error::Api`](crate::Error::Api) for unknown ids and other failures
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.get_album("0sNOF9WDwhWunNAHPD3Baj", None).await?;
    /// println!("{}", album["name"]);
    /// ```
    pub async fn get_album(&mut self, id: &str, market: Option<&str>) -> Result<Value> {
        let query = Params::new().push_opt("market", market);
        self.dispatch(&GET_ALBUM, &[("id", id)], query, None).await
    }

    /// Retrieves up to [`MAX_SEVERAL_ALBUMS`] albums in one request.
    ///
    /// The ids are sent comma-joined in the `ids` query parameter. Blank ids
    /// are skipped; more than [`MAX_SEVERAL_ALBUMS`] fail with
    /// [`Error::TooManyItems`] before anything is sent. Splitting larger
    /// batches into chunks is left to the caller.
    pub async fn get_several_albums(
        &mut self,
        ids: &[&str],
        market: Option<&str>,
    ) -> Result<Value> {
        let ids = ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>();
        if ids.len() > MAX_SEVERAL_ALBUMS {
            return Err(Error::TooManyItems {
                name: "ids",
                max: MAX_SEVERAL_ALBUMS,
                given: ids.len(),
            });
        }
        let ids = ids.join(",");
        let ids = endpoints::require("ids", &ids)?;

        let query = Params::new().push("ids", ids).push_opt("market", market);
        self.dispatch(&GET_SEVERAL_ALBUMS, &[], query, None).await
    }

    /// Retrieves one page of an album's tracks.
    pub async fn get_album_tracks(
        &mut self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Value> {
        let query = Params::new()
            .push_opt("limit", limit)
            .push_opt("offset", offset)
            .push_opt("market", market);
        self.dispatch(&GET_ALBUM_TRACKS, &[("id", id)], query, None)
            .await
    }
}
