/// Message used when a rejection body carries no usable detail.
pub const GENERIC_REJECTION: &str = "Scan failed";

/// Message used when a transport error has no description.
pub const GENERIC_TRANSPORT: &str = "Unknown error occurred";

/// Why a scan call did not produce a result.
///
/// A completed scan that reports `vulnerable: null` is NOT an error; it
/// deserializes into a normal `ScanResult` and never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service answered with a non-success status. The message comes
    /// from the response body's `detail` field when present.
    #[error("{0}")]
    Rejected(String),
    /// The call failed before a usable response body was obtained:
    /// network error, or a 2xx body that did not parse as a result.
    #[error("{0}")]
    Transport(String),
}

impl ClientError {
    /// The user-facing message, regardless of class.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(msg) | Self::Transport(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_class_independent() {
        assert_eq!(ClientError::Rejected("timeout".into()).message(), "timeout");
        assert_eq!(
            ClientError::Transport("connection refused".into()).message(),
            "connection refused"
        );
    }

    #[test]
    fn display_matches_message() {
        let err = ClientError::Rejected("invalid host".into());
        assert_eq!(err.to_string(), "invalid host");
    }
}
