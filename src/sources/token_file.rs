use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::token::Token;

/// What reading one candidate token file produced
#[derive(Debug)]
pub enum FileOutcome {
    /// file does not exist
    Missing,
    /// file exists but holds only whitespace
    Empty,
    Found(Token),
    Failed(io::Error),
}

pub fn read_token_file(path: &Path) -> FileOutcome {
    match fs::read(path) {
        Ok(raw) => match Token::from_raw(&raw) {
            Some(token) => FileOutcome::Found(token),
            None => FileOutcome::Empty,
        },
        Err(err) if err.kind() == ErrorKind::NotFound => FileOutcome::Missing,
        Err(err) => FileOutcome::Failed(err),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn missing_empty_found_and_failed() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("absent");
        assert!(matches!(read_token_file(&missing), FileOutcome::Missing));

        let empty = dir.path().join("empty");
        fs::write(&empty, " \n\t").unwrap();
        assert!(matches!(read_token_file(&empty), FileOutcome::Empty));

        let found = dir.path().join("found");
        fs::write(&found, "  12  345  \n").unwrap();
        match read_token_file(&found) {
            FileOutcome::Found(token) => assert_eq!(token.as_bytes(), b"12  345"),
            other => panic!("expected token, got {:?}", other),
        }

        // reading a directory fails with something other than NotFound
        match read_token_file(dir.path()) {
            FileOutcome::Failed(err) => assert_ne!(err.kind(), ErrorKind::NotFound),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn missing_parent_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("bt_u1000");
        assert!(matches!(read_token_file(&path), FileOutcome::Missing));
    }
}
