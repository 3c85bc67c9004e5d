//! Spotify Web API client library
//!
//! This library wraps the Spotify Web API behind an authenticated request
//! pipeline. A client is created from application credentials, authorized
//! once with an authorization-code grant, and from then on keeps its bearer
//! token valid on its own, refreshing it when it expires.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - Error taxonomy returned by the client
//! - `management` - Token state and clock
//! - `server` - Local HTTP server receiving the authorization redirect
//! - `spotify` - Authenticator, request pipeline and endpoint methods
//! - `transport` - HTTP transport seam and its `reqwest` implementation
//! - `types` - Credentials and wire types
//! - `utils` - Header encoding and output helpers
//!
//! # Example
//!
//! ```
//! use spotwrap::{Credentials, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotwrap::Res<()> {
//!     let credentials = Credentials::new("id", "secret", "http://127.0.0.1:8888/callback", "");
//!     let mut client = SpotifyClient::new(credentials)?;
//!     client.authorize("code-from-redirect").await?;
//!     let album = client.get_album("0sNOF9WDwhWunNAHPD3Baj", None).await?;
//!     println!("{}", album["name"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod transport;
pub mod types;
pub mod utils;

pub use error::{ApiError, AuthError, Error, PermissionError, Result};
pub use management::{Clock, SystemClock, TokenState};
pub use spotify::{Authenticator, ClientBuilder, SpotifyClient};
pub use transport::{Body, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{Credentials, SearchType};

/// A convenient Result type alias for the application layers.
///
/// Used by configuration loading, the callback server and the CLI, where
/// errors are only reported to the user. Library calls return the typed
/// [`Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Status lines go to stderr; stdout carries only command output, so it
/// can be piped into tools like `jq`.
///
/// # Example
///
/// ```
/// info!("Waiting for the authorization callback...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark to stderr.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the command-line layer; the library never calls
/// it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
