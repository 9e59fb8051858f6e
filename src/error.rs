//! Error types for richlabel.

use std::fmt;
use std::io;

/// Result type alias for richlabel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richlabel operations.
#[derive(Debug)]
pub enum Error {
    /// Modifiers were supplied but there is no label to substitute into.
    InvalidContent { reason: String },
    /// The label carries a sentinel but the first modifier's token never occurs in it.
    UnresolvedPlaceholder { token: String, label: String },
    /// An actionable segment exists without a bound action.
    MissingAction { text: String },
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Content JSON could not be decoded.
    Json(serde_json::Error),
    /// I/O error while reading content.
    Io(io::Error),
}

impl Error {
    /// Build an `InvalidContent` error.
    #[must_use]
    pub fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidContent {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContent { reason } => write!(f, "invalid content: {reason}"),
            Self::UnresolvedPlaceholder { token, label } => {
                write!(f, "placeholder {token:?} not found in label {label:?}")
            }
            Self::MissingAction { text } => {
                write!(f, "actionable text {text:?} has no bound action")
            }
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::Json(e) => write!(f, "invalid content json: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
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
        let err = Error::invalid_content("label is missing");
        assert_eq!(err.to_string(), "invalid content: label is missing");

        let err = Error::UnresolvedPlaceholder {
            token: "$VAR$".to_string(),
            label: "no token $here".to_string(),
        };
        assert!(err.to_string().contains("\"$VAR$\""));

        let err = Error::MissingAction {
            text: "returnable".to_string(),
        };
        assert!(err.to_string().contains("no bound action"));

        let err = Error::InvalidColor("#12".to_string());
        assert!(err.to_string().contains("invalid color format"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
