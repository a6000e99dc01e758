use std::fmt;

/// Bearer token contents, already trimmed and never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    /// Trim `raw` and wrap it. Returns `None` when nothing but whitespace is left.
    pub fn from_raw(raw: &[u8]) -> Option<Self> {
        let trimmed = trim_token(raw);
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Token as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// never print token contents
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} bytes>)", self.len())
    }
}

/// Strip leading and trailing whitespace, keeping interior whitespace.
/// Characters are decoded one at a time from each end and trimming stops at the
/// first non-whitespace character or invalid UTF-8 sequence.
pub fn trim_token(raw: &[u8]) -> &[u8] {
    let mut trimmed = raw;
    while let Some((ch, len)) = first_char(trimmed) {
        if !ch.is_whitespace() {
            break;
        }
        trimmed = &trimmed[len..];
    }
    while let Some((ch, len)) = last_char(trimmed) {
        if !ch.is_whitespace() {
            break;
        }
        trimmed = &trimmed[..trimmed.len() - len];
    }
    trimmed
}

/// Leading char and its encoded length, `None` if `raw` starts with an invalid sequence
fn first_char(raw: &[u8]) -> Option<(char, usize)> {
    let prefix = &raw[..raw.len().min(4)];
    let valid = match std::str::from_utf8(prefix) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&prefix[..err.valid_up_to()]).ok()?,
    };
    valid.chars().next().map(|ch| (ch, ch.len_utf8()))
}

/// Trailing char and its encoded length, `None` if `raw` ends with an invalid sequence
fn last_char(raw: &[u8]) -> Option<(char, usize)> {
    (1..=raw.len().min(4)).find_map(|len| {
        std::str::from_utf8(&raw[raw.len() - len..])
            .ok()
            .and_then(|text| text.chars().next_back())
            .map(|ch| (ch, len))
    })
}
