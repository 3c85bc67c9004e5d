//! # CLI Module
//!
//! Command implementations for the `spotwrap` binary. Each resource command
//! authorizes a fresh client (see [`auth::authenticated_client`]), performs
//! one or a few calls and prints the JSON response.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotwrap auth-url                              # Print the consent URL
//! spotwrap album 0sNOF9WDwhWunNAHPD3Baj          # Browser flow, then fetch
//! spotwrap --code AQB... me                      # Exchange a known code
//! spotwrap search "cyndi lauper" --type artist,album
//! ```
//!
//! Fatal errors are printed with the `error!` macro and end the process
//! with exit code 1.

pub mod auth;
mod catalog;
mod output;
mod playlist;
mod profile;
mod search;

pub use auth::auth_url;
pub use catalog::{album, album_tracks, artist, top_tracks};
pub use playlist::{add_tracks, create_playlist, playlists};
pub use profile::{me, user};
pub use search::search;
