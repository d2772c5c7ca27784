//! Entry identifiers.
//!
//! Chips and panels name an entry with a `"<namespace>:<key>"` string. Only
//! the key takes part in lookups; the namespace lets several lists of chips
//! share a dataset without clashing.

use std::fmt;

use crate::error::{Error, Result};

/// An entry identifier of the form `"<namespace>:<key>"`.
///
/// The key is exactly the second `:`-separated segment, so `"a:b:c"` has
/// key `"b"`. Construction never fails; [`Identifier::key`] reports a
/// missing key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    raw: String,
}

impl Identifier {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Build an identifier from its namespace and key.
    #[must_use]
    pub fn from_parts(namespace: &str, key: &str) -> Self {
        Self::new(format!("{namespace}:{key}"))
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The namespace (first segment).
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.raw.split(':').next().unwrap_or_default()
    }

    /// The key (second segment).
    pub fn key(&self) -> Result<&str> {
        self.raw
            .split(':')
            .nth(1)
            .ok_or_else(|| Error::MalformedIdentifier(self.raw.clone()))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identifier {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
