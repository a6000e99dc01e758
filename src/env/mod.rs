//! Injectable access to the process environment and the current user id.

use std::collections::HashMap;
use std::ffi::OsString;

/// Environment variable lookup
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<OsString>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables, for tests and for embedders that resolve tokens
/// on behalf of another environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

impl<T: EnvProvider + ?Sized> EnvProvider for &T {
    fn get(&self, key: &str) -> Option<OsString> {
        (**self).get(key)
    }
}

/// Numeric id of the current OS user
pub trait UidProvider {
    fn uid(&self) -> Result<u32, String>;
}

/// Asks the OS for the real uid of this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUid;

impl UidProvider for SystemUid {
    #[cfg(unix)]
    fn uid(&self) -> Result<u32, String> {
        Ok(nix::unistd::getuid().as_raw())
    }

    #[cfg(not(unix))]
    fn uid(&self) -> Result<u32, String> {
        Err("numeric user ids are not available on this platform".to_owned())
    }
}

/// Always answers with the same uid, or always fails when built with `failing`.
#[derive(Debug, Clone)]
pub struct FixedUid(Result<u32, String>);

impl FixedUid {
    pub fn new(uid: u32) -> Self {
        Self(Ok(uid))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self(Err(reason.into()))
    }
}

impl UidProvider for FixedUid {
    fn uid(&self) -> Result<u32, String> {
        self.0.clone()
    }
}

impl<T: UidProvider + ?Sized> UidProvider for &T {
    fn uid(&self) -> Result<u32, String> {
        (**self).uid()
    }
}
