use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::discovery::error::DiscoveryError;
use crate::env::{EnvProvider, UidProvider};
use crate::sources::token_file::{read_token_file, FileOutcome};
use crate::sources::TokenSource;
use crate::token::Token;
use crate::utils::constants::{
    token_file_name, ENV_BEARER_TOKEN, ENV_BEARER_TOKEN_FILE, ENV_XDG_RUNTIME_DIR,
    FALLBACK_TOKEN_DIR,
};

/// Token found by the discovery procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredToken {
    pub token: Token,
    /// file the token was read from, `None` for `$BEARER_TOKEN`
    pub path: Option<PathBuf>,
    pub source: TokenSource,
}

impl DiscoveredToken {
    pub fn into_parts(self) -> (Token, Option<PathBuf>) {
        (self.token, self.path)
    }
}

/// Runs the WLCG Bearer Token Discovery chain against an injected
/// environment and uid provider. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct TokenResolver<E, U> {
    env: E,
    uid: U,
}

impl<E: EnvProvider, U: UidProvider> TokenResolver<E, U> {
    pub fn new(env: E, uid: U) -> Self {
        Self { env, uid }
    }

    /// First match wins:
    /// 1. `$BEARER_TOKEN`
    /// 2. the file named by `$BEARER_TOKEN_FILE`
    /// 3. `$XDG_RUNTIME_DIR/bt_u<uid>`
    /// 4. `/tmp/bt_u<uid>`
    ///
    /// A file that is missing at step 2 or 3 ends the search with `NotFound`,
    /// a file with only whitespace moves on to the next step.
    pub fn resolve(&self) -> Result<DiscoveredToken, DiscoveryError> {
        if let Some(found) = self.inline_token() {
            return Ok(found);
        }

        if let Some(path) = self.env_path(ENV_BEARER_TOKEN_FILE) {
            if let Some(result) = candidate(TokenSource::EnvFile, path) {
                return result;
            }
        }

        let uid = self.uid.uid().map_err(|reason| {
            warn!("cannot determine current uid: {}", reason);
            DiscoveryError::Identity(reason)
        })?;
        let file_name = token_file_name(uid);

        if let Some(dir) = self.env_path(ENV_XDG_RUNTIME_DIR) {
            if let Some(result) = candidate(TokenSource::RuntimeDir, dir.join(&file_name)) {
                return result;
            }
        }

        let fallback = Path::new(FALLBACK_TOKEN_DIR).join(&file_name);
        candidate(TokenSource::TmpFallback, fallback).unwrap_or_else(|| {
            debug!("token discovery exhausted");
            Err(DiscoveryError::NotFound)
        })
    }

    fn inline_token(&self) -> Option<DiscoveredToken> {
        let value = self.env.get(ENV_BEARER_TOKEN)?;
        match Token::from_raw(value.as_encoded_bytes()) {
            Some(token) => {
                debug!("token taken from ${}", ENV_BEARER_TOKEN);
                Some(DiscoveredToken { token, path: None, source: TokenSource::InlineEnv })
            }
            None => {
                debug!("${} is blank, skipping", ENV_BEARER_TOKEN);
                None
            }
        }
    }

    /// Path-valued variable; an empty value counts as unset
    fn env_path(&self, key: &str) -> Option<PathBuf> {
        self.env
            .get(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

/// `None` means fall through to the next step
fn candidate(source: TokenSource, path: PathBuf) -> Option<Result<DiscoveredToken, DiscoveryError>> {
    match read_token_file(&path) {
        FileOutcome::Found(token) => {
            debug!("token taken from {} ({})", path.display(), source);
            Some(Ok(DiscoveredToken { token, path: Some(path), source }))
        }
        FileOutcome::Missing => {
            debug!("token file {} does not exist ({})", path.display(), source);
            Some(Err(DiscoveryError::NotFound))
        }
        FileOutcome::Empty => {
            debug!("token file {} is empty ({}), skipping", path.display(), source);
            None
        }
        FileOutcome::Failed(err) => {
            warn!("cannot read token file {}: {}", path.display(), err);
            Some(Err(DiscoveryError::Io { path, source: err }))
        }
    }
}
