// tests/common/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::resolver::TokenResolver;
use crate::env::{FixedUid, MapEnv};
use crate::utils::constants::{token_file_name, FALLBACK_TOKEN_DIR};

/// uids far above any real account so `/tmp/bt_u<uid>` never hits a real token
pub const TEST_UID_BASE: u32 = 3_999_000_000;

pub fn test_uid(offset: u32) -> u32 {
    TEST_UID_BASE + offset
}

pub fn resolver(env: MapEnv, uid: u32) -> TokenResolver<MapEnv, FixedUid> {
    TokenResolver::new(env, FixedUid::new(uid))
}

pub fn write_file(path: &Path, content: &str) -> PathBuf {
    fs::write(path, content).expect("write token file");
    path.to_path_buf()
}

/// `/tmp/bt_u<uid>` for a test uid, removed again on drop
pub struct FallbackFile {
    pub path: PathBuf,
}

impl FallbackFile {
    /// Make sure nothing is there
    pub fn absent(uid: u32) -> Self {
        let path = Path::new(FALLBACK_TOKEN_DIR).join(token_file_name(uid));
        remove_any(&path);
        Self { path }
    }

    pub fn with_content(uid: u32, content: &str) -> Self {
        let fallback = Self::absent(uid);
        write_file(&fallback.path, content);
        fallback
    }

    /// A directory in place of the file, so reading it fails
    pub fn unreadable(uid: u32) -> Self {
        let fallback = Self::absent(uid);
        fs::create_dir(&fallback.path).expect("create dir in place of token file");
        fallback
    }
}

impl Drop for FallbackFile {
    fn drop(&mut self) {
        remove_any(&self.path);
    }
}

fn remove_any(path: &Path) {
    if path.is_dir() {
        let _ = fs::remove_dir_all(path);
    } else {
        let _ = fs::remove_file(path);
    }
}
