//! # API Module
//!
//! HTTP handlers of the short-lived local server that receives Spotify's
//! authorization redirect.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect after the user grants (or denies)
//!   consent and stores the one-time authorization code in shared state.
//!   The code is exchanged for tokens by the client, not by the handler.
//! - [`health`] - Returns status and version, handy to check that the
//!   redirect URI points at the running server.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spotwrap::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback).layer(Extension(state)))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::{CallbackOutcome, SharedCallback, callback};
pub use health::health;
