use serde_json::Value;

use crate::{
    error::Result,
    spotify::{
        SpotifyClient,
        endpoints::{GET_CURRENT_USER, GET_USER_PROFILE, Params},
    },
    transport::Transport,
};

impl<T: Transport> SpotifyClient<T> {
    /// Profile of the user who granted the authorization, including the
    /// username needed by the playlist endpoints.
    pub async fn me(&mut self) -> Result<Value> {
        self.dispatch(&GET_CURRENT_USER, &[], Params::new(), None)
            .await
    }

    pub async fn get_user_profile(&mut self, user: &str) -> Result<Value> {
        self.dispatch(&GET_USER_PROFILE, &[("user", user)], Params::new(), None)
            .await
    }
}
