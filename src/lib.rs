//! # Bearer Token Discovery Library
//!
//! Locates a bearer token on the local machine following the WLCG Bearer
//! Token Discovery procedure: `$BEARER_TOKEN`, the file named by
//! `$BEARER_TOKEN_FILE`, `$XDG_RUNTIME_DIR/bt_u<uid>` and finally `/tmp/bt_u<uid>`.
//!
//! Modules:
//! - `discovery` — the ordered lookup chain and its error type
//! - `env` — injectable environment and uid providers
//! - `sources` — discovery steps and candidate file reading
//! - `token` — trimmed, non-empty token bytes
//! - `config` — settings for the `bt-discover` binary
//! - `utils` — protocol constants and logging setup

pub mod config;
pub mod discovery;
pub mod env;
pub mod sources;
pub mod token;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::discovery::error::DiscoveryError;
pub use crate::discovery::resolver::{DiscoveredToken, TokenResolver};
pub use crate::discovery::{discover, find_token, find_token_and_file};
pub use crate::sources::TokenSource;
pub use crate::token::Token;
