//! Error types for fetching items.

use std::error::Error as StdError;

use thiserror::Error;

/// Why a fetch of the items endpoint failed.
///
/// The `Display` text is exactly what the user sees in the error area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// The request could not complete (DNS, connect, timeout, body decode)
    #[error("{message}")]
    Network { message: String },

    /// The fetch task ended without reporting a result
    #[error("Request aborted before completion")]
    Aborted,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timed out: {}", error_chain(&err))
        } else {
            error_chain(&err)
        };
        FetchError::Network { message }
    }
}

/// Join an error and all of its sources into one line.
///
/// reqwest keeps the interesting part ("Connection refused") in the source
/// chain, not in the top-level message.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Connection refused")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    impl StdError for Inner {}

    #[test]
    fn test_request_error_message() {
        let err = FetchError::Request { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_network_error_uses_message_verbatim() {
        let err = FetchError::Network {
            message: "dns lookup failed".to_string(),
        };
        assert_eq!(err.to_string(), "dns lookup failed");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(Inner);
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }
}
