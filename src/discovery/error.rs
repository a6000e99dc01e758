use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of the discovery procedure.
///
/// `NotFound` means no credential is available, which callers usually
/// tolerate. The other variants mean the lookup itself broke.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no token found using WLCG Bearer Token Discovery procedure")]
    NotFound,

    #[error("cannot read token file located at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not get current user from OS: {0}")]
    Identity(String),
}

impl DiscoveryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DiscoveryError::NotFound)
    }

    /// Path of the candidate file that could not be read
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            DiscoveryError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
