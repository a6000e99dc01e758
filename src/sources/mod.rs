use std::fmt;

use serde::Serialize;

pub mod token_file;

/// Discovery step a token came from, in the order the steps are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// `$BEARER_TOKEN`
    InlineEnv,
    /// file named by `$BEARER_TOKEN_FILE`
    EnvFile,
    /// `$XDG_RUNTIME_DIR/bt_u<uid>`
    RuntimeDir,
    /// `/tmp/bt_u<uid>`
    TmpFallback,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::InlineEnv => "inline_env",
            TokenSource::EnvFile => "env_file",
            TokenSource::RuntimeDir => "runtime_dir",
            TokenSource::TmpFallback => "tmp_fallback",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
