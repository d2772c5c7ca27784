//! Error types for experience panels.

use std::fmt;
use std::io;

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for panel operations.
#[derive(Debug)]
pub enum Error {
    /// The identifier's key has no entry in the dataset.
    Lookup { key: String },
    /// The identifier has no key segment (fewer than two `:`-separated parts).
    MalformedIdentifier(String),
    /// The current page has no producer in the entry's page map.
    PageNotFound { page: String },
    /// Canvas dimension error (zero width or height).
    InvalidDimensions { width: u32, height: u32 },
    /// I/O error from terminal operations.
    Io(io::Error),
}

impl Error {
    /// Whether this error means the entry could not be resolved.
    ///
    /// Malformed identifiers count: their key is undefined.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. } | Self::MalformedIdentifier(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup { key } => write!(f, "no experience entry for key {key:?}"),
            Self::MalformedIdentifier(raw) => {
                write!(f, "malformed identifier {raw:?}: expected <namespace>:<key>")
            }
            Self::PageNotFound { page } => write!(f, "no content for page {page:?}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Lookup {
            key: "missing".to_string(),
        };
        assert!(err.to_string().contains("\"missing\""));

        let err = Error::MalformedIdentifier("alpha".to_string());
        assert!(err.to_string().contains("<namespace>:<key>"));

        let err = Error::PageNotFound {
            page: "detail".to_string(),
        };
        assert!(err.to_string().contains("detail"));

        let err = Error::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert!(err.to_string().contains("0x10"));
    }

    #[test]
    fn test_lookup_classification() {
        assert!(Error::Lookup { key: "k".into() }.is_lookup());
        assert!(Error::MalformedIdentifier("k".into()).is_lookup());
        assert!(!Error::PageNotFound { page: "/".into() }.is_lookup());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
