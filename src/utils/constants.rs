//! Shared constants of the WLCG Bearer Token Discovery procedure

/// Inline token value
pub const ENV_BEARER_TOKEN: &str = "BEARER_TOKEN";
/// Path to a file holding the token
pub const ENV_BEARER_TOKEN_FILE: &str = "BEARER_TOKEN_FILE";
/// Per-user runtime directory
pub const ENV_XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";

/// Token file name is `bt_u<uid>`
pub const TOKEN_FILE_PREFIX: &str = "bt_u";
/// Last resort directory, not configurable
pub const FALLBACK_TOKEN_DIR: &str = "/tmp";

pub fn token_file_name(uid: u32) -> String {
    format!("{}{}", TOKEN_FILE_PREFIX, uid)
}
