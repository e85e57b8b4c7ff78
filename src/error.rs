//! Error types for opengraph-meta

use thiserror::Error;

/// Errors that can occur when consuming or publishing Open Graph data.
#[derive(Debug, Error)]
pub enum Error {
    /// An injected HTTP client failed to fetch the document
    #[error("client error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP request failed
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to read file
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// An element attribute arrived before any element of its kind (debug mode only)
    #[error("found '{key}' property but no {kind} was found before")]
    OrphanAttribute {
        /// The offending property key, e.g. `image:width`
        key: String,
        /// The element kind the attribute belongs to, e.g. `image`
        kind: &'static str,
    },

    /// The publisher cannot render a property value of this type
    #[error("cannot handle value of type '{value_type}' for property '{key}'")]
    UnsupportedValue {
        /// The property key
        key: String,
        /// Name of the rejected value type
        value_type: &'static str,
    },
}

impl Error {
    /// Wrap an arbitrary transport error raised by a custom [`Fetch`](crate::Fetch) implementation.
    pub fn client(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Client(err.into())
    }
}

/// Result type alias for opengraph-meta operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orphan_attribute_message() {
        let err = Error::OrphanAttribute {
            key: "image:width".to_string(),
            kind: "image",
        };
        assert_eq!(
            err.to_string(),
            "found 'image:width' property but no image was found before"
        );
    }

    #[test]
    fn test_client_error_wraps_source() {
        let err = Error::client("connection refused");
        assert_eq!(err.to_string(), "client error: connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }
}
