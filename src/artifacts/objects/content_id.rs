//! Content identifier of an immutable object
//!
//! Identifiers are produced by the object primitives and are opaque to this
//! crate: they are stored, forwarded and checked for presence, never parsed.
//!
//! ## Format
//!
//! Whatever the primitive printed on stdout, minus line terminators.

use std::fmt;

/// Opaque identifier for a tree or commit object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an identifier from a primitive's captured stdout
    ///
    /// Every `\n` and `\r` is removed; bytes that are not valid UTF-8 are
    /// replaced rather than rejected.
    pub fn from_output(stdout: &[u8]) -> Self {
        Self(strip_line_terminators(&String::from_utf8_lossy(stdout)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn strip_line_terminators(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
