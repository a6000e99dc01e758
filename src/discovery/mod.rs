use std::path::PathBuf;

use crate::env::{SystemEnv, SystemUid};
use crate::token::Token;

pub mod error;
pub mod resolver;

use error::DiscoveryError;
use resolver::{DiscoveredToken, TokenResolver};

/// Resolver bound to the real process environment and uid
pub fn system_resolver() -> TokenResolver<SystemEnv, SystemUid> {
    TokenResolver::new(SystemEnv, SystemUid)
}

/// Locate a bearer token following the WLCG Bearer Token Discovery procedure.
pub fn find_token() -> Result<Token, DiscoveryError> {
    find_token_and_file().map(|(token, _)| token)
}

/// Like [`find_token`], also returning the file the token was read from.
/// The path is `None` when the token came from `$BEARER_TOKEN`.
pub fn find_token_and_file() -> Result<(Token, Option<PathBuf>), DiscoveryError> {
    discover().map(DiscoveredToken::into_parts)
}

/// Full discovery result including the step that produced the token
pub fn discover() -> Result<DiscoveredToken, DiscoveryError> {
    system_resolver().resolve()
}
